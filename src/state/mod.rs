//! Shared application state and per-session state.
//!
//! `AppState` holds the immutable collaborators (config, voice catalog,
//! provider client, credit ledger) plus a registry of per-session state.
//! Sessions are created on first use and live for the lifetime of the
//! process; nothing is shared between sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ServerConfig;
use crate::core::artifact::ArtifactStore;
use crate::core::credits::CreditLedger;
use crate::core::synthesis::{NeuralTtsClient, SpeechSynthesizer, SynthesisResult};
use crate::core::voice_catalog::VoiceCatalog;

/// Per-session mutable state: the artifact slot and the in-flight flag.
#[derive(Debug, Default)]
pub struct SessionState {
    pub artifacts: ArtifactStore,
    synthesizing: AtomicBool,
}

impl SessionState {
    /// Whether a synthesis call is currently outstanding.
    pub fn is_synthesizing(&self) -> bool {
        self.synthesizing.load(Ordering::Acquire)
    }
}

/// Clears the session's in-flight flag on drop.
pub struct SynthesisGuard {
    session: Arc<SessionState>,
}

impl SynthesisGuard {
    /// Marks the session as synthesizing.
    ///
    /// Returns `None` if a synthesis is already outstanding; concurrent
    /// submissions from one session are rejected rather than interleaved.
    /// The guard clears the flag when dropped, including on early return
    /// from a failed call.
    pub fn acquire(session: &Arc<SessionState>) -> Option<Self> {
        if session
            .synthesizing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(Self {
                session: Arc::clone(session),
            })
        } else {
            None
        }
    }
}

impl Drop for SynthesisGuard {
    fn drop(&mut self) {
        self.session.synthesizing.store(false, Ordering::Release);
    }
}

/// Application state that can be shared across handlers
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: VoiceCatalog,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub credits: CreditLedger,
    sessions: RwLock<HashMap<String, Arc<SessionState>>>,
}

impl AppState {
    /// Creates application state with the production provider client.
    pub fn new(config: ServerConfig) -> SynthesisResult<Arc<Self>> {
        let synthesizer = Arc::new(NeuralTtsClient::new(
            config.subscription_key.clone(),
            &config.region,
            config.request_timeout(),
        )?);
        Ok(Self::with_synthesizer(config, synthesizer))
    }

    /// Creates application state with an explicit synthesizer.
    ///
    /// Used by tests to substitute a stub for the provider client.
    pub fn with_synthesizer(
        config: ServerConfig,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Arc<Self> {
        let credits = CreditLedger::new(config.starting_credits);
        Arc::new(Self {
            config,
            catalog: VoiceCatalog::default(),
            synthesizer,
            credits,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the state for a session, creating it on first use.
    pub fn session(&self, session_id: &str) -> Arc<SessionState> {
        if let Some(session) = self.sessions.read().get(session_id) {
            return Arc::clone(session);
        }
        let mut sessions = self.sessions.write();
        Arc::clone(
            sessions
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(SessionState::default())),
        )
    }

    /// Returns the state for a session only if it already exists.
    pub fn find_session(&self, session_id: &str) -> Option<Arc<SessionState>> {
        self.sessions.read().get(session_id).map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artifact::AudioArtifact;
    use crate::core::synthesis::{SynthesisRequest, SynthesisResult};
    use async_trait::async_trait;
    use bytes::Bytes;

    struct NullSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for NullSynthesizer {
        async fn synthesize(&self, _request: &SynthesisRequest) -> SynthesisResult<AudioArtifact> {
            Ok(AudioArtifact::mp3(Bytes::new()))
        }
    }

    fn test_state() -> Arc<AppState> {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3002,
            subscription_key: "test-key".to_string(),
            region: "eastus".to_string(),
            request_timeout_seconds: None,
            starting_credits: 10_000,
        };
        AppState::with_synthesizer(config, Arc::new(NullSynthesizer))
    }

    #[test]
    fn test_session_created_on_first_use() {
        let state = test_state();
        assert!(state.find_session("s1").is_none());

        let session = state.session("s1");
        assert!(!session.is_synthesizing());
        assert!(state.find_session("s1").is_some());
    }

    #[test]
    fn test_session_lookup_returns_same_instance() {
        let state = test_state();
        let first = state.session("s1");
        let second = state.session("s1");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_synthesis_guard_blocks_reentry() {
        let state = test_state();
        let session = state.session("s1");

        let guard = SynthesisGuard::acquire(&session).unwrap();
        assert!(session.is_synthesizing());
        assert!(SynthesisGuard::acquire(&session).is_none());

        drop(guard);
        assert!(!session.is_synthesizing());
        assert!(SynthesisGuard::acquire(&session).is_some());
    }

    #[test]
    fn test_sessions_do_not_share_guards() {
        let state = test_state();
        let a = state.session("a");
        let b = state.session("b");

        let _guard = SynthesisGuard::acquire(&a).unwrap();
        assert!(SynthesisGuard::acquire(&b).is_some());
    }
}
