//! Static voice catalog for the synthesis service.
//!
//! The catalog is an immutable, ordered mapping from human-readable voice
//! labels to provider voice identifiers. It is loaded once at startup and
//! drives both the `/voices` listing and voice resolution during parameter
//! validation.

use serde::Serialize;
use thiserror::Error;

use crate::core::synthesis::SynthesisError;

/// Errors that can occur while loading the voice catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share the same label.
    #[error("duplicate voice label: {0}")]
    DuplicateLabel(String),

    /// An entry has an empty provider identifier.
    #[error("empty provider id for voice: {0}")]
    EmptyProviderId(String),
}

/// A single voice offered by the synthesis provider.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceEntry {
    /// Human-readable label shown in selection surfaces.
    pub label: String,
    /// Provider voice identifier (e.g. `en-US-AvaMultilingualNeural`).
    #[serde(rename = "voice_id")]
    pub provider_id: String,
}

/// Ordered, immutable voice catalog.
///
/// Insertion order is preserved so selection controls render voices in the
/// order they were registered.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    entries: Vec<VoiceEntry>,
}

/// The neural voices offered by the product, in display order.
const DEFAULT_VOICES: &[(&str, &str)] = &[
    ("Ava", "en-US-AvaMultilingualNeural"),
    ("Andrew", "en-US-AndrewMultilingualNeural"),
    ("Neerja", "en-IN-NeerjaExpressiveNeural"),
    ("Prabhat", "en-IN-PrabhatNeural"),
    ("Aarav", "hi-IN-MadhurNeural"),
    ("Swara", "hi-IN-SwaraNeural"),
    ("Emma", "en-GB-EmmaMultilingualNeural"),
    ("Ryan", "en-GB-RyanNeural"),
];

impl VoiceCatalog {
    /// Creates a catalog from the given entries.
    ///
    /// Fails if a label appears twice or a provider id is empty; both
    /// invariants are required for unambiguous resolution.
    pub fn new(entries: Vec<VoiceEntry>) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.provider_id.is_empty() {
                return Err(CatalogError::EmptyProviderId(entry.label.clone()));
            }
            if entries[..i].iter().any(|e| e.label == entry.label) {
                return Err(CatalogError::DuplicateLabel(entry.label.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the voices in insertion order.
    pub fn voices(&self) -> &[VoiceEntry] {
        &self.entries
    }

    /// Resolves a voice label to its provider identifier.
    pub fn resolve(&self, label: &str) -> Result<&str, SynthesisError> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.provider_id.as_str())
            .ok_or_else(|| SynthesisError::UnknownVoice(label.to_string()))
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        let entries = DEFAULT_VOICES
            .iter()
            .map(|(label, provider_id)| VoiceEntry {
                label: (*label).to_string(),
                provider_id: (*provider_id).to_string(),
            })
            .collect();
        Self::new(entries).expect("default voice catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_preserves_insertion_order() {
        let catalog = VoiceCatalog::default();
        let labels: Vec<&str> = catalog.voices().iter().map(|v| v.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Ava", "Andrew", "Neerja", "Prabhat", "Aarav", "Swara", "Emma", "Ryan"]
        );
    }

    #[test]
    fn test_resolve_known_label() {
        let catalog = VoiceCatalog::default();
        assert_eq!(
            catalog.resolve("Ava").unwrap(),
            "en-US-AvaMultilingualNeural"
        );
        assert_eq!(catalog.resolve("Ryan").unwrap(), "en-GB-RyanNeural");
    }

    #[test]
    fn test_resolve_unknown_label() {
        let catalog = VoiceCatalog::default();
        let err = catalog.resolve("Nonexistent").unwrap_err();
        assert!(matches!(err, SynthesisError::UnknownVoice(label) if label == "Nonexistent"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let catalog = VoiceCatalog::default();
        assert!(catalog.resolve("ava").is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_labels() {
        let entries = vec![
            VoiceEntry {
                label: "Ava".to_string(),
                provider_id: "en-US-AvaMultilingualNeural".to_string(),
            },
            VoiceEntry {
                label: "Ava".to_string(),
                provider_id: "en-US-AriaNeural".to_string(),
            },
        ];
        let err = VoiceCatalog::new(entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel(label) if label == "Ava"));
    }

    #[test]
    fn test_new_rejects_empty_provider_id() {
        let entries = vec![VoiceEntry {
            label: "Ghost".to_string(),
            provider_id: String::new(),
        }];
        let err = VoiceCatalog::new(entries).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyProviderId(label) if label == "Ghost"));
    }

    #[test]
    fn test_every_default_provider_id_is_non_empty() {
        let catalog = VoiceCatalog::default();
        assert!(catalog.voices().iter().all(|v| !v.provider_id.is_empty()));
    }
}
