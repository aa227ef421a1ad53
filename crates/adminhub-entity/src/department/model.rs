//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::status::EntityStatus;

/// An organizational department. Departments form a hierarchy through
/// `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Parent department, if any.
    pub parent_id: Option<Uuid>,
    /// Department name.
    pub department_name: String,
    /// Department status.
    pub status: EntityStatus,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Parent department, if any.
    pub parent_id: Option<Uuid>,
    /// Department name.
    pub department_name: String,
}

/// Typed patch for updating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentPatch {
    /// New parent department. An explicit `null` detaches to a root.
    #[serde(default, deserialize_with = "crate::serde_util::double_option")]
    pub parent_id: Option<Option<Uuid>>,
    /// New department name.
    pub department_name: Option<String>,
    /// New status.
    pub status: Option<EntityStatus>,
}

impl DepartmentPatch {
    /// Apply the patch to a department record, field by field.
    pub fn apply(&self, department: &mut Department) {
        if let Some(parent_id) = self.parent_id {
            department.parent_id = parent_id;
        }
        if let Some(department_name) = &self.department_name {
            department.department_name = department_name.clone();
        }
        if let Some(status) = self.status {
            department.status = status;
        }
    }
}
