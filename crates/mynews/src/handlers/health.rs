//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (counts records in the store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 with the record count when the store answers, 503 otherwise.
/// The cache is not consulted.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.news.total_count().await {
        Ok(total) => Json(serde_json::json!({
            "ready": true,
            "total": total,
        }))
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "ready": false,
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
