//! `CurrentUser` extractor — pulls the bearer token from the
//! Authorization header and resolves it through the auth gateway.
//!
//! The gateway performs the cheap local decode first, then the token
//! store round-trip, then the user load with a disabled re-check. This
//! runs once per authenticated request; handlers receive a resolved
//! identity instead of a raw token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use adminhub_auth::jwt::Claims;
use adminhub_core::error::AppError;
use adminhub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user row as currently stored.
    pub user: User,
    /// The validated token claims.
    pub claims: Claims,
    /// The raw bearer token, kept for the logout path.
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::authentication("Missing Authorization header")))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError(AppError::authentication("Invalid Authorization header format"))
        })?;

        let authed = state.gateway.authenticate(token).await?;

        Ok(CurrentUser {
            user: authed.user,
            claims: authed.claims,
            token: token.to_string(),
        })
    }
}
