//! Menu administration service.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_database::repositories::menu::MenuRepository;
use adminhub_entity::menu::{CreateMenu, Menu, MenuPatch, MenuTree, RouteItem};

use super::tree::{build_tree, route_from_node};

/// Business rules around menu CRUD and tree assembly.
#[derive(Debug, Clone)]
pub struct MenuService {
    /// Menu repository.
    menus: Arc<MenuRepository>,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(menus: Arc<MenuRepository>) -> Self {
        Self { menus }
    }

    /// Creates a menu after uniqueness and parent-existence checks.
    pub async fn create_menu(&self, menu: CreateMenu) -> AppResult<Menu> {
        if self.menus.menu_id_exists(menu.menu_id, None).await? {
            return Err(AppError::validation(format!(
                "Menu id {} already exists",
                menu.menu_id
            )));
        }
        if self.menus.name_exists(&menu.name, None).await? {
            return Err(AppError::validation(format!(
                "Menu name '{}' already exists",
                menu.name
            )));
        }
        if self.menus.path_exists(&menu.path, None).await? {
            return Err(AppError::validation(format!(
                "Route path '{}' already exists",
                menu.path
            )));
        }
        if let Some(parent_id) = menu.parent_id
            && self.menus.find_by_menu_id(parent_id).await?.is_none()
        {
            return Err(AppError::validation(format!(
                "Parent menu {parent_id} does not exist"
            )));
        }

        let created = self.menus.create(&menu).await?;
        info!(menu_id = created.menu_id, name = %created.name, "Menu created");
        Ok(created)
    }

    /// Lists menus with pagination and optional filters.
    pub async fn list_menus(
        &self,
        page: &PageRequest,
        hidden: Option<bool>,
        parent_id: Option<i32>,
    ) -> AppResult<PageResponse<Menu>> {
        self.menus.find_page(page, hidden, parent_id).await
    }

    /// Fetches a menu by primary key.
    pub async fn get_menu(&self, id: Uuid) -> AppResult<Menu> {
        self.menus
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Menu not found"))
    }

    /// Applies a typed patch to a menu.
    pub async fn update_menu(&self, id: Uuid, patch: MenuPatch) -> AppResult<Menu> {
        let mut menu = self.get_menu(id).await?;

        if let Some(name) = &patch.name
            && self.menus.name_exists(name, Some(id)).await?
        {
            return Err(AppError::validation(format!(
                "Menu name '{name}' is already used by another menu"
            )));
        }
        if let Some(path) = &patch.path
            && self.menus.path_exists(path, Some(id)).await?
        {
            return Err(AppError::validation(format!(
                "Route path '{path}' is already used by another menu"
            )));
        }
        if let Some(Some(parent_id)) = patch.parent_id {
            if parent_id == menu.menu_id {
                return Err(AppError::validation(
                    "A menu cannot be its own parent",
                ));
            }
            if self.menus.find_by_menu_id(parent_id).await?.is_none() {
                return Err(AppError::validation(format!(
                    "Parent menu {parent_id} does not exist"
                )));
            }
        }

        patch.apply(&mut menu);
        let updated = self.menus.update(&menu).await?;
        info!(menu_id = updated.menu_id, "Menu updated");
        Ok(updated)
    }

    /// Deletes a menu; refused while it still has children.
    pub async fn delete_menu(&self, id: Uuid) -> AppResult<()> {
        let menu = self.get_menu(id).await?;

        let children = self.menus.find_children(menu.menu_id).await?;
        if !children.is_empty() {
            return Err(AppError::validation(
                "Menu still has child menus and cannot be deleted",
            ));
        }

        if !self.menus.delete(id).await? {
            return Err(AppError::not_found("Menu not found"));
        }
        info!(menu_id = menu.menu_id, "Menu deleted");
        Ok(())
    }

    /// Flips a menu's hidden flag and returns the updated record.
    pub async fn toggle_visibility(&self, id: Uuid) -> AppResult<Menu> {
        let mut menu = self.get_menu(id).await?;
        menu.hidden = !menu.hidden;
        let updated = self.menus.update(&menu).await?;
        info!(menu_id = updated.menu_id, hidden = updated.hidden, "Menu visibility toggled");
        Ok(updated)
    }

    /// Allocates the next available business `menu_id`.
    pub async fn next_menu_id(&self) -> AppResult<i32> {
        self.menus.next_menu_id().await
    }

    /// Counts menus, optionally filtered by visibility.
    pub async fn count_menus(&self, hidden: Option<bool>) -> AppResult<i64> {
        self.menus.count(hidden).await
    }

    /// Builds the full menu tree.
    ///
    /// The snapshot is fetched in one query, then the tree is assembled
    /// purely in memory.
    pub async fn menu_tree(&self, show_hidden: bool) -> AppResult<MenuTree> {
        let menus = if show_hidden {
            self.menus.find_all_ordered().await?
        } else {
            self.menus.find_visible_ordered().await?
        };

        let tree = build_tree(&menus);
        if tree.orphans > 0 {
            warn!(
                orphans = tree.orphans,
                "Menu snapshot contains records with unresolved parents"
            );
        }
        Ok(tree)
    }

    /// Builds the full menu tree in the frontend route shape.
    pub async fn route_tree(&self, show_hidden: bool) -> AppResult<Vec<RouteItem>> {
        let tree = self.menu_tree(show_hidden).await?;
        Ok(tree.roots.into_iter().map(route_from_node).collect())
    }
}
