//! Role administration handlers, including route-tree resolution.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use adminhub_core::error::AppError;
use adminhub_core::types::pagination::PageResponse;
use adminhub_entity::menu::RouteItem;
use adminhub_entity::role::{CreateRole, Role, RolePatch};

use crate::dto::request::{
    AssignMenusRequest, ChangeStatusRequest, CreateRoleRequest, ListQuery, UpdateRoleRequest,
};
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/roles
pub async fn create_role(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<CreateRoleRequest>,
) -> Result<Json<ApiResponse<Role>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = state
        .role_service
        .create_role(CreateRole {
            role_name: req.role_name,
            role_code: req.role_code,
            description: req.description,
        })
        .await?;

    Ok(Json(ApiResponse::ok(role)))
}

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Role>>>, ApiError> {
    let page = state.role_service.list_roles(&query.page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Role>>, ApiError> {
    let role = state.role_service.get_role(id).await?;
    Ok(Json(ApiResponse::ok(role)))
}

/// PUT /api/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<ApiResponse<Role>>, ApiError> {
    let role = state
        .role_service
        .update_role(
            id,
            RolePatch {
                role_name: req.role_name,
                role_code: req.role_code,
                description: req.description,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(role)))
}

/// PUT /api/roles/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<Role>>, ApiError> {
    let role = state.role_service.change_status(id, req.status).await?;
    Ok(Json(ApiResponse::ok(role)))
}

/// DELETE /api/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.role_service.delete_role(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Role deleted".to_string(),
    })))
}

/// GET /api/roles/{id}/menus
///
/// Returns the role's resolved route tree in the exact shape the
/// frontend router consumes.
pub async fn get_role_menus(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RouteItem>>>, ApiError> {
    let routes = state.route_resolver.resolve_routes(id).await?;
    Ok(Json(ApiResponse::ok(routes)))
}

/// PUT /api/roles/{id}/menus
pub async fn assign_menus(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignMenusRequest>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state
        .role_service
        .assign_menus(id, &req.menu_ids, req.is_enabled)
        .await?;

    Ok(Json(ApiResponse::ok(CountResponse {
        count: count as i64,
    })))
}
