use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// GET /health
/// Reports 503 with `"status": "degraded"` when the job store cannot be reached.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (code, status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            warn!("Health check failed, job store unreachable: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        code,
        Json(json!({
            "status": status,
            "database": database,
            "version": env!("CARGO_PKG_VERSION"),
            "service": env!("CARGO_PKG_NAME")
        })),
    )
}
