use axum::Json;
use serde_json::{json, Value};

/// Answer a CORS preflight. The allow headers come from the router's
/// fixed header layers.
pub async fn preflight() -> Json<Value> {
    Json(json!({}))
}
