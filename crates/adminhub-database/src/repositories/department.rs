//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_entity::department::{CreateDepartment, Department};

/// Repository for department CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find department by id", e)
            })
    }

    /// List all departments with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Department>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count departments", e)
            })?;

        let departments = sqlx::query_as::<_, Department>(
            "SELECT * FROM departments ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))?;

        Ok(PageResponse::new(
            departments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new department and return it.
    pub async fn create(&self, department: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (parent_id, department_name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(department.parent_id)
        .bind(&department.department_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create department", e))
    }

    /// Write back all mutable columns of a department row.
    pub async fn update(&self, department: &Department) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments
            SET parent_id = $2,
                department_name = $3,
                status = $4,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(department.id)
        .bind(department.parent_id)
        .bind(&department.department_name)
        .bind(department.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update department", e))
    }

    /// Delete a department by primary key. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete department", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count direct child departments.
    pub async fn count_children(&self, id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count child departments", e)
            })
    }
}
