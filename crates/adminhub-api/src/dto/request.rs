//! Request DTOs with validation.
//!
//! Menu create/update bodies deserialize straight into the entity crate's
//! `CreateMenu` / `MenuPatch` types, so they are not duplicated here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use adminhub_core::types::pagination::PageRequest;
use adminhub_entity::status::EntityStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; policy-checked by the service layer.
    #[validate(length(min = 8))]
    pub password: String,
    /// Department assignment.
    pub department_id: Uuid,
    /// Role assignment.
    pub role_id: Uuid,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Update user request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    pub user_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New department assignment.
    pub department_id: Option<Uuid>,
    /// New role assignment.
    pub role_id: Option<Uuid>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// New password.
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Status change request (users and roles).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    /// The new status.
    pub status: EntityStatus,
}

/// Create role request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, max = 100))]
    pub role_name: String,
    /// Role code.
    #[validate(length(min = 1, max = 50))]
    pub role_code: String,
    /// Description.
    pub description: Option<String>,
}

/// Update role request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// New role name.
    pub role_name: Option<String>,
    /// New role code.
    pub role_code: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<EntityStatus>,
}

/// Replace a role's menu grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignMenusRequest {
    /// Business menu ids to grant.
    pub menu_ids: Vec<i32>,
    /// Whether the grants are enabled.
    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

/// Create department request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Parent department, if any.
    pub parent_id: Option<Uuid>,
    /// Department name.
    #[validate(length(min = 1, max = 100))]
    pub department_name: String,
}

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

impl ListQuery {
    /// Convert to a clamped page request.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.page_size.unwrap_or(25))
    }
}

/// Query parameters for menu listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Filter by visibility.
    pub hidden: Option<bool>,
    /// Filter by parent `menu_id`.
    pub parent_id: Option<i32>,
}

impl MenuListQuery {
    /// Convert to a clamped page request.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.page_size.unwrap_or(25))
    }
}

/// Query parameters for the admin menu tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeQuery {
    /// Include hidden menus.
    #[serde(default)]
    pub show_hidden: bool,
}

fn default_true() -> bool {
    true
}
