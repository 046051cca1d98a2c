use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness payload for the root path.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "status": "online",
        "message": "AI Placement Predictor API is running",
        "version": "1.0.0"
    }))
}

/// GET /health
/// Readiness payload for monitoring probes. The mock engine doubles as
/// both model and explainer, so both flags track the same capability.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model_loaded": true,
        "explainer_loaded": true
    }))
}
