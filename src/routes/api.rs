use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{audio, credits, synthesize, voices};
use crate::state::AppState;
use std::sync::Arc;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/voices", get(voices::list_voices))
        .route("/synthesize", post(synthesize::synthesize_handler))
        .route("/audio/{session_id}/{handle}", get(audio::download_audio))
        .route(
            "/sessions/{session_id}/credits",
            get(credits::session_credits),
        )
        .layer(TraceLayer::new_for_http())
}
