//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use adminhub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.gateway.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token,
        token_type: "bearer".to_string(),
        expires_at: outcome.expires_at,
        user_info: outcome.user,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.gateway.logout(&current.token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(current: CurrentUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse::from(current.user)))
}
