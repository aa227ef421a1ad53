//! User administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use adminhub_core::error::AppError;
use adminhub_core::types::pagination::PageResponse;
use adminhub_entity::user::UserPatch;
use adminhub_service::user::service::NewUser;

use crate::dto::request::{
    ChangePasswordRequest, ChangeStatusRequest, CreateUserRequest, ListQuery, UpdateUserRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .create_user(NewUser {
            user_name: req.user_name,
            email: req.email,
            password: req.password,
            department_id: req.department_id,
            role_id: req.role_id,
            avatar_url: req.avatar_url,
        })
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let page = state.user_service.list_users(&query.page_request()).await?;

    let items = page.items.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok(PageResponse::new(
        items,
        page.page,
        page.page_size,
        page.total_items,
    ))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update_user(
            id,
            UserPatch {
                user_name: req.user_name,
                email: req.email,
                department_id: req.department_id,
                role_id: req.role_id,
                avatar_url: req.avatar_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PUT /api/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.change_status(id, req.status).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PUT /api/users/{id}/password
pub async fn change_password(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .change_password(id, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed".to_string(),
    })))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}
