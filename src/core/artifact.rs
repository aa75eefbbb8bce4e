//! Single-slot artifact store for synthesized audio.
//!
//! Each session holds at most one live artifact. A new save supersedes the
//! previous one and invalidates its handle; there is no accumulation and no
//! historical retention. Retrieval of a superseded or never-created handle is
//! a contract violation surfaced as [`ArtifactNotFound`].

use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use parking_lot::RwLock;
use thiserror::Error;

/// MIME type of every artifact produced by the service.
pub const ARTIFACT_MIME_TYPE: &str = "audio/mp3";

/// Download filename for every artifact.
pub const ARTIFACT_FILENAME: &str = "audio.mp3";

/// A generated audio byte sequence plus its metadata.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Bytes,
    pub mime_type: String,
    pub filename: String,
}

impl AudioArtifact {
    /// Creates an MP3 artifact with the standard metadata.
    pub fn mp3(bytes: Bytes) -> Self {
        Self {
            bytes,
            mime_type: ARTIFACT_MIME_TYPE.to_string(),
            filename: ARTIFACT_FILENAME.to_string(),
        }
    }
}

/// Opaque handle to a stored artifact.
///
/// Handles are monotonically increasing per store; a stale handle never
/// resolves again after being superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactHandle(u64);

impl ArtifactHandle {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtifactHandle {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Retrieval of a superseded or never-created handle.
#[derive(Debug, Clone, Error)]
#[error("artifact not found")]
pub struct ArtifactNotFound;

/// Session-scoped store holding the current artifact, if any.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    slot: RwLock<Option<(ArtifactHandle, AudioArtifact)>>,
    next_handle: AtomicU64,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an artifact, superseding any previous one.
    ///
    /// Returns the handle under which the artifact is retrievable until the
    /// next save. The previous handle, if any, becomes invalid.
    pub fn save(&self, artifact: AudioArtifact) -> ArtifactHandle {
        let handle = ArtifactHandle(self.next_handle.fetch_add(1, Ordering::Relaxed) + 1);
        *self.slot.write() = Some((handle, artifact));
        handle
    }

    /// Retrieves the artifact stored under `handle`.
    pub fn retrieve(&self, handle: ArtifactHandle) -> Result<AudioArtifact, ArtifactNotFound> {
        match &*self.slot.read() {
            Some((current, artifact)) if *current == handle => Ok(artifact.clone()),
            _ => Err(ArtifactNotFound),
        }
    }

    /// Returns the handle of the current artifact, if one exists.
    pub fn current(&self) -> Option<ArtifactHandle> {
        self.slot.read().as_ref().map(|(handle, _)| *handle)
    }
}
