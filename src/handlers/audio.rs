use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::core::artifact::ArtifactHandle;
use crate::errors::app_error::AppError;
use crate::state::AppState;

/// Handler for GET /audio/{session_id}/{handle}
///
/// Serves the current artifact for playback and download. A superseded or
/// never-created handle yields 404; the body is the complete MP3 byte
/// sequence with an attachment disposition carrying the fixed filename.
pub async fn download_audio(
    State(state): State<Arc<AppState>>,
    Path((session_id, handle)): Path<(String, u64)>,
) -> Result<Response, AppError> {
    let session = state
        .find_session(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("unknown session: {session_id}")))?;

    let artifact = session.artifacts.retrieve(ArtifactHandle::from(handle))?;

    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.mime_type.clone()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}
