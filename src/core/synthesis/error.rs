use std::time::Duration;

use thiserror::Error;

/// Errors raised by the synthesis pipeline.
///
/// The first three variants are local validation failures: they are recovered
/// immediately, never reach the provider, and leave session state untouched.
/// `Provider` and `Timeout` are external-call failures; the underlying cause
/// text is preserved for display and diagnostics.
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    /// The submitted text was empty or whitespace-only.
    #[error("input text is empty")]
    EmptyInput,

    /// The requested voice label is not in the catalog.
    #[error("unknown voice: {0}")]
    UnknownVoice(String),

    /// A numeric parameter fell outside its allowed bounds.
    #[error("{field} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// The provider call failed; wraps the underlying cause message.
    #[error("provider error: {0}")]
    Provider(String),

    /// No provider response arrived within the configured bound.
    #[error("synthesis timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;
