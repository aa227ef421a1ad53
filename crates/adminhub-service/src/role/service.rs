//! Role administration service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_database::repositories::role::RoleRepository;
use adminhub_database::repositories::role_menu::RoleMenuRepository;
use adminhub_database::repositories::user::UserRepository;
use adminhub_entity::role::{CreateRole, Role, RolePatch};
use adminhub_entity::status::EntityStatus;

/// Business rules around role CRUD and menu grants.
#[derive(Debug, Clone)]
pub struct RoleService {
    /// Role repository.
    roles: Arc<RoleRepository>,
    /// Role↔menu association repository.
    role_menus: Arc<RoleMenuRepository>,
    /// User repository, for delete blocking.
    users: Arc<UserRepository>,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(
        roles: Arc<RoleRepository>,
        role_menus: Arc<RoleMenuRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            roles,
            role_menus,
            users,
        }
    }

    /// Creates a role after name/code uniqueness checks.
    pub async fn create_role(&self, role: CreateRole) -> AppResult<Role> {
        if self
            .roles
            .name_or_code_exists(&role.role_name, &role.role_code, None)
            .await?
        {
            return Err(AppError::validation(
                "Role name or code already exists",
            ));
        }

        let created = self.roles.create(&role).await?;
        info!(role_id = %created.id, role_name = %created.role_name, "Role created");
        Ok(created)
    }

    /// Lists roles with pagination.
    pub async fn list_roles(&self, page: &PageRequest) -> AppResult<PageResponse<Role>> {
        self.roles.find_all(page).await
    }

    /// Fetches a role by primary key.
    pub async fn get_role(&self, id: Uuid) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))
    }

    /// Applies a typed patch to a role.
    pub async fn update_role(&self, id: Uuid, patch: RolePatch) -> AppResult<Role> {
        let mut role = self.get_role(id).await?;

        if patch.role_name.is_some() || patch.role_code.is_some() {
            let role_name = patch.role_name.as_deref().unwrap_or(&role.role_name);
            let role_code = patch.role_code.as_deref().unwrap_or(&role.role_code);
            if self
                .roles
                .name_or_code_exists(role_name, role_code, Some(id))
                .await?
            {
                return Err(AppError::validation(
                    "Role name or code is already used by another role",
                ));
            }
        }

        patch.apply(&mut role);
        let updated = self.roles.update(&role).await?;
        info!(role_id = %updated.id, "Role updated");
        Ok(updated)
    }

    /// Changes a role's status.
    pub async fn change_status(&self, id: Uuid, status: EntityStatus) -> AppResult<Role> {
        self.update_role(
            id,
            RolePatch {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Deletes a role; refused while users still hold it.
    pub async fn delete_role(&self, id: Uuid) -> AppResult<()> {
        let role = self.get_role(id).await?;

        let holders = self.users.count_by_role(id).await?;
        if holders > 0 {
            return Err(AppError::validation(
                "Role is still assigned to users and cannot be deleted",
            ));
        }

        self.role_menus.delete_for_role(id).await?;
        if !self.roles.delete(id).await? {
            return Err(AppError::not_found("Role not found"));
        }
        info!(role_id = %role.id, role_name = %role.role_name, "Role deleted");
        Ok(())
    }

    /// Replaces the set of menus granted to a role.
    pub async fn assign_menus(
        &self,
        role_id: Uuid,
        menu_ids: &[i32],
        is_enabled: bool,
    ) -> AppResult<u64> {
        // Confirm the role exists before touching associations.
        self.get_role(role_id).await?;
        let count = self
            .role_menus
            .replace_for_role(role_id, menu_ids, is_enabled)
            .await?;
        info!(role_id = %role_id, granted = count, "Role menu grants replaced");
        Ok(count)
    }
}
