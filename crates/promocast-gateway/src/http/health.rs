use axum::Json;
use serde_json::{json, Value};

/// GET /health — liveness probe for connectivity tests.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
