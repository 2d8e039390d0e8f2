//! GET /health

use axum::{extract::State, http::StatusCode, Json};
use blog_service::HealthResponse;

use crate::state::AppState;

/// Probes both backing stores and reports per-dependency status.
/// A degraded deployment answers 503 with the same body shape.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let context = state.service_context();

    let database_up = context.pool().acquire().await.is_ok();
    let sessions_up = context.session_store().health_check().await.is_ok();

    let status = if database_up && sessions_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(HealthResponse::report(database_up, sessions_up)))
}
