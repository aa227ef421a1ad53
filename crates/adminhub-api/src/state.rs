//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use adminhub_auth::gateway::AuthGateway;
use adminhub_auth::session::SessionManager;
use adminhub_cache::provider::CacheManager;
use adminhub_core::config::AppConfig;
use adminhub_service::department::DepartmentService;
use adminhub_service::menu::MenuService;
use adminhub_service::role::{RoleService, RouteResolver};
use adminhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Login / logout / authenticate-by-token orchestration
    pub gateway: Arc<AuthGateway>,
    /// Session token state machine
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// User administration service
    pub user_service: Arc<UserService>,
    /// Role administration service
    pub role_service: Arc<RoleService>,
    /// Menu administration service
    pub menu_service: Arc<MenuService>,
    /// Department administration service
    pub department_service: Arc<DepartmentService>,
    /// Role → route-tree resolver
    pub route_resolver: Arc<RouteResolver>,
}
