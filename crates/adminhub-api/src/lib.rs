//! # adminhub-api
//!
//! HTTP API layer for AdminHub, built on Axum. Owns the router, the
//! shared application state, request/response DTOs, the authenticated
//! user extractor, and the error → HTTP mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
