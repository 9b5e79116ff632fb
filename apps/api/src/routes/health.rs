use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness only; touches no other service state.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Resume Analysis API is running"
    }))
}
