use axum::Json;
use serde_json::{json, Value};

/// Liveness check; touches no upstream service.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
