use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::core::voice_catalog::VoiceEntry;
use crate::state::AppState;

/// Handler for GET /voices - returns the catalog in display order
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<Vec<VoiceEntry>> {
    Json(state.catalog.voices().to_vec())
}
