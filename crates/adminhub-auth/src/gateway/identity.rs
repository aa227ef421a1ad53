//! Read-only identity lookups the auth gateway depends on.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use adminhub_core::result::AppResult;
use adminhub_database::repositories::department::DepartmentRepository;
use adminhub_database::repositories::role::RoleRepository;
use adminhub_database::repositories::user::UserRepository;
use adminhub_entity::user::User;

/// Read-only view over user records and their department/role relations.
///
/// The gateway is injected with `Arc<dyn IdentitySource>` so login and
/// token-authentication logic can be exercised against an in-memory
/// source in tests.
#[async_trait]
pub trait IdentitySource: Send + Sync + 'static {
    /// Find a user by email (the login identifier).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Resolve a department's display name.
    async fn department_name(&self, department_id: Uuid) -> AppResult<Option<String>>;

    /// Resolve a role's display name.
    async fn role_name(&self, role_id: Uuid) -> AppResult<Option<String>>;
}

/// Database-backed identity source used in production.
#[derive(Debug, Clone)]
pub struct DbIdentitySource {
    users: Arc<UserRepository>,
    departments: Arc<DepartmentRepository>,
    roles: Arc<RoleRepository>,
}

impl DbIdentitySource {
    /// Create a new database-backed identity source.
    pub fn new(
        users: Arc<UserRepository>,
        departments: Arc<DepartmentRepository>,
        roles: Arc<RoleRepository>,
    ) -> Self {
        Self {
            users,
            departments,
            roles,
        }
    }
}

#[async_trait]
impl IdentitySource for DbIdentitySource {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn department_name(&self, department_id: Uuid) -> AppResult<Option<String>> {
        Ok(self
            .departments
            .find_by_id(department_id)
            .await?
            .map(|d| d.department_name))
    }

    async fn role_name(&self, role_id: Uuid) -> AppResult<Option<String>> {
        Ok(self.roles.find_by_id(role_id).await?.map(|r| r.role_name))
    }
}
