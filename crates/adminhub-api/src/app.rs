//! Application builder — wires repositories, auth, and services into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use adminhub_auth::gateway::{AuthGateway, DbIdentitySource};
use adminhub_auth::jwt::{TokenDecoder, TokenEncoder};
use adminhub_auth::password::{PasswordHasher, PasswordValidator};
use adminhub_auth::session::SessionManager;
use adminhub_auth::token::TokenStore;
use adminhub_cache::provider::CacheManager;
use adminhub_core::config::AppConfig;
use adminhub_core::error::AppError;
use adminhub_database::repositories::{
    DepartmentRepository, MenuRepository, RoleMenuRepository, RoleRepository, UserRepository,
};
use adminhub_service::department::DepartmentService;
use adminhub_service::menu::MenuService;
use adminhub_service::role::{RoleService, RouteResolver};
use adminhub_service::user::UserService;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Constructs the application state from configuration and an already
/// connected database pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Cache ────────────────────────────────────────────────
    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));
    let department_repo = Arc::new(DepartmentRepository::new(db_pool.clone()));
    let menu_repo = Arc::new(MenuRepository::new(db_pool.clone()));
    let role_menu_repo = Arc::new(RoleMenuRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    tracing::info!("Initializing authentication system");
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_encoder = Arc::new(TokenEncoder::new(&config.auth)?);
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth)?);
    let token_store = Arc::new(TokenStore::new(
        Arc::clone(&cache),
        Arc::clone(&token_decoder),
        &config.auth,
    ));
    let session_manager = Arc::new(SessionManager::new(
        token_encoder,
        Arc::clone(&token_decoder),
        token_store,
    ));
    let identity = Arc::new(DbIdentitySource::new(
        Arc::clone(&user_repo),
        Arc::clone(&department_repo),
        Arc::clone(&role_repo),
    ));
    let gateway = Arc::new(AuthGateway::new(
        identity,
        Arc::clone(&password_hasher),
        Arc::clone(&session_manager),
        token_decoder,
    ));

    // ── Services ─────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&department_repo),
        Arc::clone(&role_repo),
        password_hasher,
        password_validator,
    ));
    let role_service = Arc::new(RoleService::new(
        Arc::clone(&role_repo),
        Arc::clone(&role_menu_repo),
        Arc::clone(&user_repo),
    ));
    let menu_service = Arc::new(MenuService::new(Arc::clone(&menu_repo)));
    let department_service = Arc::new(DepartmentService::new(
        Arc::clone(&department_repo),
        Arc::clone(&user_repo),
    ));
    let route_resolver = Arc::new(RouteResolver::new(role_repo, menu_repo, role_menu_repo));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        gateway,
        session_manager,
        user_service,
        role_service,
        menu_service,
        department_service,
        route_resolver,
    })
}

/// Runs the AdminHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AdminHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("AdminHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
