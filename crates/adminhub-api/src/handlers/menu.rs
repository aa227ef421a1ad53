//! Menu administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use adminhub_core::types::pagination::PageResponse;
use adminhub_entity::menu::{CreateMenu, Menu, MenuPatch, RouteItem};

use crate::dto::request::{MenuListQuery, TreeQuery};
use crate::dto::response::{ApiResponse, MessageResponse, NextMenuIdResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/menus
pub async fn create_menu(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(menu): Json<CreateMenu>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.create_menu(menu).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// GET /api/menus
pub async fn list_menus(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<MenuListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Menu>>>, ApiError> {
    let page = state
        .menu_service
        .list_menus(&query.page_request(), query.hidden, query.parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/menus/tree
///
/// The full tree in the frontend route shape, hidden entries included on
/// request. Role-filtered route trees live under `/api/roles/{id}/menus`.
pub async fn menu_tree(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<TreeQuery>,
) -> Result<Json<ApiResponse<Vec<RouteItem>>>, ApiError> {
    let routes = state.menu_service.route_tree(query.show_hidden).await?;
    Ok(Json(ApiResponse::ok(routes)))
}

/// GET /api/menus/next-id
pub async fn next_menu_id(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Result<Json<ApiResponse<NextMenuIdResponse>>, ApiError> {
    let next_menu_id = state.menu_service.next_menu_id().await?;
    Ok(Json(ApiResponse::ok(NextMenuIdResponse { next_menu_id })))
}

/// GET /api/menus/{id}
pub async fn get_menu(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.get_menu(id).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// PUT /api/menus/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<MenuPatch>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.update_menu(id, patch).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// PUT /api/menus/{id}/toggle-visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.toggle_visibility(id).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// DELETE /api/menus/{id}
pub async fn delete_menu(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.menu_service.delete_menu(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Menu deleted".to_string(),
    })))
}
