//! Role↔menu association repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_entity::role_menu::RoleMenu;

/// Repository for role↔menu association operations.
#[derive(Debug, Clone)]
pub struct RoleMenuRepository {
    pool: PgPool,
}

impl RoleMenuRepository {
    /// Create a new role↔menu repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all associations for a role.
    pub async fn find_by_role(&self, role_id: Uuid) -> AppResult<Vec<RoleMenu>> {
        sqlx::query_as::<_, RoleMenu>(
            "SELECT * FROM role_menus WHERE role_id = $1 ORDER BY menu_id ASC",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list role menus", e))
    }

    /// Fetch the enabled associations for a role.
    pub async fn find_enabled_by_role(&self, role_id: Uuid) -> AppResult<Vec<RoleMenu>> {
        sqlx::query_as::<_, RoleMenu>(
            r#"
            SELECT * FROM role_menus
            WHERE role_id = $1 AND is_enabled = TRUE
            ORDER BY menu_id ASC
            "#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list enabled role menus", e)
        })
    }

    /// Replace a role's menu grants wholesale, inside one transaction.
    pub async fn replace_for_role(
        &self,
        role_id: Uuid,
        menu_ids: &[i32],
        is_enabled: bool,
    ) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM role_menus WHERE role_id = $1")
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear role menus", e)
            })?;

        let mut inserted = 0u64;
        for menu_id in menu_ids {
            sqlx::query(
                r#"
                INSERT INTO role_menus (role_id, menu_id, is_enabled)
                VALUES ($1, $2, $3)
                ON CONFLICT (role_id, menu_id) DO UPDATE SET is_enabled = $3, updated_at = now()
                "#,
            )
            .bind(role_id)
            .bind(menu_id)
            .bind(is_enabled)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert role menu", e)
            })?;
            inserted += 1;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit role menu changes", e)
        })?;

        Ok(inserted)
    }

    /// Remove every association for a role. Returns the number removed.
    pub async fn delete_for_role(&self, role_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM role_menus WHERE role_id = $1")
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete role menus", e)
            })?;
        Ok(result.rows_affected())
    }
}
