//! Route definitions for the AdminHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all domain routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(role_routes())
        .merge(menu_routes())
        .merge(department_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// User administration endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
        .route("/users/{id}/status", put(handlers::user::change_status))
        .route("/users/{id}/password", put(handlers::user::change_password))
}

/// Role administration endpoints, including route-tree resolution
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", post(handlers::role::create_role))
        .route("/roles", get(handlers::role::list_roles))
        .route("/roles/{id}", get(handlers::role::get_role))
        .route("/roles/{id}", put(handlers::role::update_role))
        .route("/roles/{id}", delete(handlers::role::delete_role))
        .route("/roles/{id}/status", put(handlers::role::change_status))
        .route("/roles/{id}/menus", get(handlers::role::get_role_menus))
        .route("/roles/{id}/menus", put(handlers::role::assign_menus))
}

/// Menu administration endpoints
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menus", post(handlers::menu::create_menu))
        .route("/menus", get(handlers::menu::list_menus))
        .route("/menus/tree", get(handlers::menu::menu_tree))
        .route("/menus/next-id", get(handlers::menu::next_menu_id))
        .route("/menus/{id}", get(handlers::menu::get_menu))
        .route("/menus/{id}", put(handlers::menu::update_menu))
        .route("/menus/{id}", delete(handlers::menu::delete_menu))
        .route(
            "/menus/{id}/toggle-visibility",
            put(handlers::menu::toggle_visibility),
        )
}

/// Department administration endpoints
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", post(handlers::department::create_department))
        .route("/departments", get(handlers::department::list_departments))
        .route("/departments/{id}", get(handlers::department::get_department))
        .route("/departments/{id}", put(handlers::department::update_department))
        .route(
            "/departments/{id}",
            delete(handlers::department::delete_department),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
