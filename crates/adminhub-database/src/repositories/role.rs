//! Role repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_entity::role::{CreateRole, Role};

/// Repository for role CRUD and query operations.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a role by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role by id", e))
    }

    /// Find a role by name.
    pub async fn find_by_name(&self, role_name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE role_name = $1")
            .bind(role_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by name", e)
            })
    }

    /// Find a role by code.
    pub async fn find_by_code(&self, role_code: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE role_code = $1")
            .bind(role_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by code", e)
            })
    }

    /// List all roles with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Role>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count roles", e))?;

        let roles = sqlx::query_as::<_, Role>(
            "SELECT * FROM roles ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))?;

        Ok(PageResponse::new(
            roles,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new role and return it.
    pub async fn create(&self, role: &CreateRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (role_name, role_code, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&role.role_name)
        .bind(&role.role_code)
        .bind(&role.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create role", e))
    }

    /// Write back all mutable columns of a role row.
    pub async fn update(&self, role: &Role) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles
            SET role_name = $2,
                role_code = $3,
                description = $4,
                status = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(role.id)
        .bind(&role.role_name)
        .bind(&role.role_code)
        .bind(&role.description)
        .bind(role.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update role", e))
    }

    /// Delete a role by primary key. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete role", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a role name or code is already taken, optionally
    /// excluding a row.
    pub async fn name_or_code_exists(
        &self,
        role_name: &str,
        role_code: &str,
        exclude_id: Option<Uuid>,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM roles
            WHERE (role_name = $1 OR role_code = $2)
              AND ($3::uuid IS NULL OR id <> $3)
            "#,
        )
        .bind(role_name)
        .bind(role_code)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check role uniqueness", e)
        })?;
        Ok(count > 0)
    }
}
