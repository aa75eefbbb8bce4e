use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

/// Health check handler
/// Reports that the synthesis service is up; carries no session state
pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "OK"
    })))
}
