//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::status::EntityStatus;

/// An RBAC role. Menu visibility is decided per role via the
/// role↔menu association table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Human-readable role name. Unique.
    pub role_name: String,
    /// Stable machine code. Unique.
    pub role_code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Role status.
    pub status: EntityStatus,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    /// Role name.
    pub role_name: String,
    /// Role code.
    pub role_code: String,
    /// Description.
    pub description: Option<String>,
}

/// Typed patch for updating a role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolePatch {
    /// New role name.
    pub role_name: Option<String>,
    /// New role code.
    pub role_code: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<EntityStatus>,
}

impl RolePatch {
    /// Apply the patch to a role record, field by field.
    pub fn apply(&self, role: &mut Role) {
        if let Some(role_name) = &self.role_name {
            role.role_name = role_name.clone();
        }
        if let Some(role_code) = &self.role_code {
            role.role_code = role_code.clone();
        }
        if let Some(description) = &self.description {
            role.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            role.status = status;
        }
    }
}
