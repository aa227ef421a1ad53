//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::status::EntityStatus;

/// A registered user in the AdminHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub user_name: String,
    /// Email address, the login identifier. Unique.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The department the user belongs to.
    pub department_id: Uuid,
    /// The role assigned to the user.
    pub role_id: Uuid,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Account status.
    pub status: EntityStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.status.is_enabled()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Department assignment.
    pub department_id: Uuid,
    /// Role assignment.
    pub role_id: Uuid,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Typed patch for updating a user.
///
/// Only the fields enumerated here may change through an update; the
/// password hash and status have their own dedicated operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
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

impl UserPatch {
    /// Apply the patch to a user record, field by field.
    pub fn apply(&self, user: &mut User) {
        if let Some(user_name) = &self.user_name {
            user.user_name = user_name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(department_id) = self.department_id {
            user.department_id = department_id;
        }
        if let Some(role_id) = self.role_id {
            user.role_id = role_id;
        }
        if let Some(avatar_url) = &self.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
    }

    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.email.is_none()
            && self.department_id.is_none()
            && self.role_id.is_none()
            && self.avatar_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            user_name: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$...".into(),
            department_id: Uuid::new_v4(),
            role_id: Uuid::new_v4(),
            avatar_url: None,
            status: EntityStatus::Enabled,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut user = sample_user();
        let original_email = user.email.clone();
        let patch = UserPatch {
            user_name: Some("alice-renamed".into()),
            ..Default::default()
        };
        patch.apply(&mut user);
        assert_eq!(user.user_name, "alice-renamed");
        assert_eq!(user.email, original_email);
    }

    #[test]
    fn test_empty_patch() {
        assert!(UserPatch::default().is_empty());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("email").is_some());
    }
}
