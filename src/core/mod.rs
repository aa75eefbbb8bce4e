pub mod artifact;
pub mod credits;
pub mod synthesis;
pub mod voice_catalog;

// Re-export commonly used types for convenience
pub use artifact::{
    ArtifactHandle, ArtifactNotFound, ArtifactStore, AudioArtifact, ARTIFACT_FILENAME,
    ARTIFACT_MIME_TYPE,
};
pub use credits::{CreditBalance, CreditLedger, STARTING_CREDITS};
pub use synthesis::{
    NeuralTtsClient, SpeechSynthesizer, SynthesisError, SynthesisParameters, SynthesisRequest,
    SynthesisResult,
};
pub use voice_catalog::{VoiceCatalog, VoiceEntry};
