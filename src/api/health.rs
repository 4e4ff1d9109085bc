use axum::Json;
use serde_json::{json, Value};

/// Liveness check; unauthenticated and outside the response envelope
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "vidtube",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vidtube",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
