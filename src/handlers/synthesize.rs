//! The synthesis endpoint: the orchestration seam of the service.
//!
//! Validates the submitted parameters, builds the wire request, invokes the
//! provider, stores the resulting artifact in the session slot, and reports
//! the remaining credit balance. Validation failures never reach the
//! provider; provider failures never touch the artifact slot, so the last
//! successful artifact stays retrievable.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::synthesis::{build, validate};
use crate::errors::app_error::AppError;
use crate::state::{AppState, SynthesisGuard};

/// Request body for the synthesize endpoint
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    /// Session the synthesis belongs to
    pub session_id: String,
    /// The text to synthesize
    pub text: String,
    /// Voice label from the catalog
    pub voice: String,
    /// Speaking rate adjustment in percent, [-50, 50]
    #[serde(default)]
    pub rate: i32,
    /// Pitch adjustment in Hz, [-20, 20]
    #[serde(default)]
    pub pitch: i32,
}

/// Response body for a successful synthesis
#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    /// Handle of the stored artifact, valid until the next synthesis
    pub handle: u64,
    /// Playback/download URL for the artifact
    pub audio_url: String,
    pub filename: String,
    pub mime_type: String,
    /// Remaining credit balance for the session
    pub credits: u64,
}

/// Handler for POST /synthesize
pub async fn synthesize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, AppError> {
    info!(
        session = %request.session_id,
        voice = %request.voice,
        text_len = request.text.len(),
        "synthesis request received"
    );

    // Validation never reaches the provider.
    let params = validate(
        &state.catalog,
        &request.text,
        &request.voice,
        request.rate,
        request.pitch,
    )
    .map_err(|e| {
        warn!(session = %request.session_id, "rejected synthesis input: {e}");
        AppError::from(e)
    })?;

    let session = state.session(&request.session_id);

    // One outstanding synthesis per session; concurrent submissions are
    // rejected instead of interleaved.
    let _guard = SynthesisGuard::acquire(&session).ok_or_else(|| {
        AppError::Conflict("a synthesis is already in progress for this session".to_string())
    })?;

    state.credits.initialize(&request.session_id);

    let wire_request = build(&params);
    let artifact = state.synthesizer.synthesize(&wire_request).await?;

    let filename = artifact.filename.clone();
    let mime_type = artifact.mime_type.clone();
    let handle = session.artifacts.save(artifact);

    // The ledger exposes charging, but no charge amount exists as a product
    // decision; synthesis currently costs zero.
    let balance = state.credits.charge(&request.session_id, 0);

    info!(
        session = %request.session_id,
        handle = handle.value(),
        credits = balance.remaining,
        "synthesis stored"
    );

    Ok(Json(SynthesizeResponse {
        handle: handle.value(),
        audio_url: format!("/audio/{}/{}", request.session_id, handle.value()),
        filename,
        mime_type,
        credits: balance.remaining,
    }))
}
