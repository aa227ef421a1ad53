//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adminhub_auth::gateway::UserInfo;
use adminhub_entity::status::EntityStatus;
use adminhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed session token.
    pub token: String,
    /// Token transport scheme.
    pub token_type: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Composite user projection.
    pub user_info: UserInfo,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// Department reference.
    pub department_id: Uuid,
    /// Role reference.
    pub role_id: Uuid,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Account status.
    pub status: EntityStatus,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            department_id: user.department_id,
            role_id: user.role_id,
            avatar_url: user.avatar_url,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Next available menu id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextMenuIdResponse {
    /// The next allocatable business `menu_id`.
    pub next_menu_id: i32,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Whether the database answered.
    pub database: bool,
    /// Whether the cache answered.
    pub cache: bool,
}
