use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::fmt;

use crate::core::artifact::ArtifactNotFound;
use crate::core::synthesis::SynthesisError;

/// Application error type
///
/// Responses carry a single-line message; full detail goes to the trace log.
/// Validation failures keep their message in the response so the caller can
/// surface a warning; provider failures keep the underlying cause text.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    ProviderFailure(String),
    GatewayTimeout(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                // Stale-handle retrieval is a contract violation, not a user
                // flow; log it and return a generic message.
                tracing::error!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }
            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            AppError::ProviderFailure(msg) => {
                tracing::error!("Provider failure: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::GatewayTimeout(msg) => {
                tracing::error!("Synthesis timeout: {}", msg);
                (StatusCode::GATEWAY_TIMEOUT, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::ProviderFailure(msg) => write!(f, "Provider failure: {msg}"),
            AppError::GatewayTimeout(msg) => write!(f, "Gateway timeout: {msg}"),
            AppError::InternalServerError(msg) => write!(f, "Internal server error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match &err {
            SynthesisError::EmptyInput
            | SynthesisError::UnknownVoice(_)
            | SynthesisError::OutOfRange { .. } => AppError::BadRequest(err.to_string()),
            SynthesisError::Provider(_) => AppError::ProviderFailure(err.to_string()),
            SynthesisError::Timeout(_) => AppError::GatewayTimeout(err.to_string()),
        }
    }
}

impl From<ArtifactNotFound> for AppError {
    fn from(err: ArtifactNotFound) -> Self {
        AppError::NotFound(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
