//! Health check handler.

use axum::Json;
use axum::extract::State;

use adminhub_core::traits::cache::CacheProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();
    let cache = state.cache.health_check().await.unwrap_or(false);

    let status = if database && cache { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        cache,
    })
}
