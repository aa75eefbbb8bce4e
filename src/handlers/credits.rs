use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::core::credits::CreditBalance;
use crate::state::AppState;

/// Handler for GET /sessions/{session_id}/credits
///
/// Read-only display of the session balance. The session is initialized on
/// first access; repeat calls never reset an established balance.
pub async fn session_credits(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Json<CreditBalance> {
    Json(state.credits.initialize(&session_id))
}
