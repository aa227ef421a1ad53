//! Menu repository implementation.
//!
//! Every multi-row query orders by `(menu_order, menu_id)` so that tree
//! construction downstream is deterministic.

use sqlx::PgPool;
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_entity::menu::{CreateMenu, Menu};

/// Business menu identifiers are allocated from this floor upward.
const MENU_ID_FLOOR: i32 = 1000;

/// Repository for menu CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: PgPool,
}

impl MenuRepository {
    /// Create a new menu repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a menu by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu by id", e))
    }

    /// Find a menu by its business `menu_id`.
    pub async fn find_by_menu_id(&self, menu_id: i32) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE menu_id = $1")
            .bind(menu_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find menu by menu_id", e)
            })
    }

    /// List menus with pagination and optional visibility / parent filters.
    pub async fn find_page(
        &self,
        page: &PageRequest,
        hidden: Option<bool>,
        parent_id: Option<i32>,
    ) -> AppResult<PageResponse<Menu>> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM menus
            WHERE ($1::boolean IS NULL OR hidden = $1)
              AND ($2::integer IS NULL OR parent_id = $2)
            "#,
        )
        .bind(hidden)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menus", e))?;

        let menus = sqlx::query_as::<_, Menu>(
            r#"
            SELECT * FROM menus
            WHERE ($1::boolean IS NULL OR hidden = $1)
              AND ($2::integer IS NULL OR parent_id = $2)
            ORDER BY menu_order ASC, menu_id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(hidden)
        .bind(parent_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))?;

        Ok(PageResponse::new(
            menus,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Fetch the full menu snapshot, ordered.
    pub async fn find_all_ordered(&self) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus ORDER BY menu_order ASC, menu_id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))
    }

    /// Fetch the visible (non-hidden) menu snapshot, ordered.
    pub async fn find_visible_ordered(&self) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>(
            "SELECT * FROM menus WHERE hidden = FALSE ORDER BY menu_order ASC, menu_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list visible menus", e))
    }

    /// Fetch the visible menus among the given `menu_id`s, ordered.
    pub async fn find_visible_by_menu_ids(&self, menu_ids: &[i32]) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>(
            r#"
            SELECT * FROM menus
            WHERE menu_id = ANY($1) AND hidden = FALSE
            ORDER BY menu_order ASC, menu_id ASC
            "#,
        )
        .bind(menu_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list menus by menu_ids", e)
        })
    }

    /// Fetch the direct children of a menu, ordered.
    pub async fn find_children(&self, parent_menu_id: i32) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>(
            "SELECT * FROM menus WHERE parent_id = $1 ORDER BY menu_order ASC, menu_id ASC",
        )
        .bind(parent_menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child menus", e))
    }

    /// Insert a new menu and return it.
    pub async fn create(&self, menu: &CreateMenu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            r#"
            INSERT INTO menus (
                menu_id, parent_id, path, component, redirect, name, title, icon,
                always_show, no_cache, affix, hidden, external_link, permission, menu_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(menu.menu_id)
        .bind(menu.parent_id)
        .bind(&menu.path)
        .bind(&menu.component)
        .bind(&menu.redirect)
        .bind(&menu.name)
        .bind(&menu.title)
        .bind(&menu.icon)
        .bind(menu.always_show)
        .bind(menu.no_cache)
        .bind(menu.affix)
        .bind(menu.hidden)
        .bind(&menu.external_link)
        .bind(&menu.permission)
        .bind(menu.menu_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu", e))
    }

    /// Write back all mutable columns of a menu row.
    pub async fn update(&self, menu: &Menu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            r#"
            UPDATE menus
            SET parent_id = $2,
                path = $3,
                component = $4,
                redirect = $5,
                name = $6,
                title = $7,
                icon = $8,
                always_show = $9,
                no_cache = $10,
                affix = $11,
                hidden = $12,
                external_link = $13,
                permission = $14,
                menu_order = $15,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(menu.id)
        .bind(menu.parent_id)
        .bind(&menu.path)
        .bind(&menu.component)
        .bind(&menu.redirect)
        .bind(&menu.name)
        .bind(&menu.title)
        .bind(&menu.icon)
        .bind(menu.always_show)
        .bind(menu.no_cache)
        .bind(menu.affix)
        .bind(menu.hidden)
        .bind(&menu.external_link)
        .bind(&menu.permission)
        .bind(menu.menu_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu", e))
    }

    /// Delete a menu by primary key. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete menu", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Allocate the next available business `menu_id`.
    pub async fn next_menu_id(&self) -> AppResult<i32> {
        let max: Option<i32> = sqlx::query_scalar("SELECT MAX(menu_id) FROM menus")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find max menu_id", e)
            })?;
        Ok(next_menu_id_from_max(max))
    }

    /// Check whether a `menu_id` is already taken, optionally excluding a row.
    pub async fn menu_id_exists(&self, menu_id: i32, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM menus
            WHERE menu_id = $1 AND ($2::uuid IS NULL OR id <> $2)
            "#,
        )
        .bind(menu_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check menu_id uniqueness", e)
        })?;
        Ok(count > 0)
    }

    /// Check whether a route name is already taken, optionally excluding a row.
    pub async fn name_exists(&self, name: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM menus
            WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2)
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check name uniqueness", e)
        })?;
        Ok(count > 0)
    }

    /// Check whether a route path is already taken, optionally excluding a row.
    pub async fn path_exists(&self, path: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM menus
            WHERE path = $1 AND ($2::uuid IS NULL OR id <> $2)
            "#,
        )
        .bind(path)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check path uniqueness", e)
        })?;
        Ok(count > 0)
    }

    /// Count menus, optionally filtered by visibility.
    pub async fn count(&self, hidden: Option<bool>) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM menus WHERE ($1::boolean IS NULL OR hidden = $1)")
            .bind(hidden)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menus", e))
    }
}

/// Derive the next `menu_id` from the current maximum: one past the max
/// once allocation has reached the floor, otherwise the floor itself.
pub(crate) fn next_menu_id_from_max(max: Option<i32>) -> i32 {
    match max {
        Some(max) if max >= MENU_ID_FLOOR => max + 1,
        _ => MENU_ID_FLOOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_menu_id_empty_table() {
        assert_eq!(next_menu_id_from_max(None), 1000);
    }

    #[test]
    fn test_next_menu_id_increments_max() {
        assert_eq!(next_menu_id_from_max(Some(1005)), 1006);
    }

    #[test]
    fn test_next_menu_id_below_floor() {
        // Legacy rows below the floor never drive allocation under 1000.
        assert_eq!(next_menu_id_from_max(Some(7)), 1000);
    }
}
