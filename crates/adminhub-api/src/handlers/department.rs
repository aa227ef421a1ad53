//! Department administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use adminhub_core::error::AppError;
use adminhub_core::types::pagination::PageResponse;
use adminhub_entity::department::{CreateDepartment, Department, DepartmentPatch};

use crate::dto::request::{CreateDepartmentRequest, ListQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let department = state
        .department_service
        .create_department(CreateDepartment {
            parent_id: req.parent_id,
            department_name: req.department_name,
        })
        .await?;

    Ok(Json(ApiResponse::ok(department)))
}

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Department>>>, ApiError> {
    let page = state
        .department_service
        .list_departments(&query.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state.department_service.get_department(id).await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<DepartmentPatch>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state
        .department_service
        .update_department(id, patch)
        .await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// DELETE /api/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.department_service.delete_department(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Department deleted".to_string(),
    })))
}
