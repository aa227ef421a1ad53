//! Role↔menu association model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Grants a role access to a menu. Unique per `(role_id, menu_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleMenu {
    /// Primary key.
    pub id: Uuid,
    /// The granting role.
    pub role_id: Uuid,
    /// The granted menu's business identifier.
    pub menu_id: i32,
    /// Whether the grant is currently active.
    pub is_enabled: bool,
    /// When the association was created.
    pub created_at: DateTime<Utc>,
    /// When the association was last updated.
    pub updated_at: DateTime<Utc>,
}
