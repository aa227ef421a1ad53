//! Maps domain `AppError` to HTTP responses.
//!
//! Every error kind maps to one stable status code. 5xx-class kinds log
//! full detail server-side and return a sanitized message; the response
//! envelope never carries stack traces or internal identifiers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use adminhub_core::error::{AppError, ErrorKind};

/// Handler-level error wrapper so `?` converts `AppError` into an HTTP
/// response at the boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message, sanitized for clients.
    pub message: String,
}

/// Resolve the stable status and code for an error kind.
pub(crate) fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_FAILED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Business => (StatusCode::INTERNAL_SERVER_ERROR, "BUSINESS_ERROR"),
        ErrorKind::StoreUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Cache
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = status_for(err.kind);

        let message = match err.kind {
            // Client-addressable kinds keep their message.
            ErrorKind::Validation
            | ErrorKind::Authentication
            | ErrorKind::Authorization
            | ErrorKind::NotFound
            | ErrorKind::Conflict
            | ErrorKind::Business => err.message.clone(),
            ErrorKind::StoreUnavailable => {
                tracing::error!(error = %err, "Token store unavailable");
                "Service temporarily unavailable".to_string()
            }
            _ => {
                tracing::error!(error = %err, "Internal server error");
                "Internal server error".to_string()
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_stable() {
        assert_eq!(
            status_for(ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(ErrorKind::Validation).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorKind::StoreUnavailable).0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(ErrorKind::Database).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_are_sanitized() {
        let response =
            ApiError(AppError::database("connection refused to 10.0.0.7:5432")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_authentication_error_keeps_generic_message() {
        let response = ApiError(AppError::authentication("invalid credentials")).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
