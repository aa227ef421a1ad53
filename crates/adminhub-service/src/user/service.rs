//! User administration service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adminhub_auth::password::{PasswordHasher, PasswordValidator};
use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_database::repositories::department::DepartmentRepository;
use adminhub_database::repositories::role::RoleRepository;
use adminhub_database::repositories::user::UserRepository;
use adminhub_entity::status::EntityStatus;
use adminhub_entity::user::{CreateUser, User, UserPatch};

/// Input for creating a user, before the password is hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, policy-checked then hashed.
    pub password: String,
    /// Department assignment.
    pub department_id: Uuid,
    /// Role assignment.
    pub role_id: Uuid,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Business rules around user CRUD.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Department repository, for reference checks.
    departments: Arc<DepartmentRepository>,
    /// Role repository, for reference checks.
    roles: Arc<RoleRepository>,
    /// Password hashing capability.
    hasher: Arc<PasswordHasher>,
    /// Password policy enforcement.
    password_validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        departments: Arc<DepartmentRepository>,
        roles: Arc<RoleRepository>,
        hasher: Arc<PasswordHasher>,
        password_validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            departments,
            roles,
            hasher,
            password_validator,
        }
    }

    /// Creates a user after uniqueness, reference, and password checks.
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if self.users.email_exists(&new_user.email, None).await? {
            return Err(AppError::validation(format!(
                "Email '{}' is already registered",
                new_user.email
            )));
        }
        if self
            .departments
            .find_by_id(new_user.department_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Department does not exist"));
        }
        if self.roles.find_by_id(new_user.role_id).await?.is_none() {
            return Err(AppError::validation("Role does not exist"));
        }

        self.password_validator.validate(&new_user.password)?;
        let password_hash = self.hasher.hash_password(&new_user.password)?;

        let created = self
            .users
            .create(&CreateUser {
                user_name: new_user.user_name,
                email: new_user.email,
                password_hash,
                department_id: new_user.department_id,
                role_id: new_user.role_id,
                avatar_url: new_user.avatar_url,
            })
            .await?;

        info!(user_id = %created.id, email = %created.email, "User created");
        Ok(created)
    }

    /// Lists users with pagination.
    pub async fn list_users(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.find_all(page).await
    }

    /// Fetches a user by primary key.
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Applies a typed patch to a user.
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> AppResult<User> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = &patch.email
            && self.users.email_exists(email, Some(id)).await?
        {
            return Err(AppError::validation(format!(
                "Email '{email}' is already registered"
            )));
        }
        if let Some(department_id) = patch.department_id
            && self.departments.find_by_id(department_id).await?.is_none()
        {
            return Err(AppError::validation("Department does not exist"));
        }
        if let Some(role_id) = patch.role_id
            && self.roles.find_by_id(role_id).await?.is_none()
        {
            return Err(AppError::validation("Role does not exist"));
        }

        patch.apply(&mut user);
        let updated = self.users.update(&user).await?;
        info!(user_id = %updated.id, "User updated");
        Ok(updated)
    }

    /// Changes a user's status. Disabling a user makes every subsequent
    /// token validation for them fail at the gateway.
    pub async fn change_status(&self, id: Uuid, status: EntityStatus) -> AppResult<User> {
        let updated = self
            .users
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        info!(user_id = %updated.id, status = %updated.status, "User status changed");
        Ok(updated)
    }

    /// Replaces a user's password after policy validation.
    pub async fn change_password(&self, id: Uuid, new_password: &str) -> AppResult<()> {
        let user = self.get_user(id).await?;

        self.password_validator.validate(new_password)?;
        let password_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password_hash(user.id, &password_hash).await?;

        info!(user_id = %user.id, "User password changed");
        Ok(())
    }

    /// Deletes a user by primary key.
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
