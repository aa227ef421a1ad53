//! Role → frontend route-tree resolution.
//!
//! Turns a role's enabled, non-hidden menu subset into the nested
//! `RouteItem` shape the frontend consumes verbatim.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_database::repositories::menu::MenuRepository;
use adminhub_database::repositories::role::RoleRepository;
use adminhub_database::repositories::role_menu::RoleMenuRepository;
use adminhub_entity::menu::RouteItem;

use crate::menu::tree::{build_tree, route_from_node};

/// Resolves the route tree a role is allowed to see.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    /// Role repository.
    roles: Arc<RoleRepository>,
    /// Menu repository.
    menus: Arc<MenuRepository>,
    /// Role↔menu association repository.
    role_menus: Arc<RoleMenuRepository>,
}

impl RouteResolver {
    /// Creates a new route resolver.
    pub fn new(
        roles: Arc<RoleRepository>,
        menus: Arc<MenuRepository>,
        role_menus: Arc<RoleMenuRepository>,
    ) -> Self {
        Self {
            roles,
            menus,
            role_menus,
        }
    }

    /// Resolves the route tree for `role_id`.
    ///
    /// A role with no enabled menu grants gets an empty list, not an
    /// error. Hidden menus are filtered out before tree construction,
    /// and the whole snapshot is fetched before the (pure) tree build.
    pub async fn resolve_routes(&self, role_id: Uuid) -> AppResult<Vec<RouteItem>> {
        if self.roles.find_by_id(role_id).await?.is_none() {
            return Err(AppError::not_found("Role not found"));
        }

        let grants = self.role_menus.find_enabled_by_role(role_id).await?;
        if grants.is_empty() {
            return Ok(Vec::new());
        }

        let menu_ids: Vec<i32> = grants.iter().map(|g| g.menu_id).collect();
        let menus = self.menus.find_visible_by_menu_ids(&menu_ids).await?;

        let tree = build_tree(&menus);
        if tree.orphans > 0 {
            warn!(
                role_id = %role_id,
                orphans = tree.orphans,
                "Role menu snapshot contains records with unresolved parents"
            );
        }

        Ok(tree.roots.into_iter().map(route_from_node).collect())
    }
}
