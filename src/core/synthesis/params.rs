//! Parameter validation for synthesis requests.
//!
//! Raw UI input (text, voice label, rate, pitch) is checked against domain
//! constraints before anything touches the provider. Rate and pitch are
//! expected to be bounded by the input control already, but the bounds are
//! re-checked here since a future input surface may not enforce them.

use crate::core::synthesis::{SynthesisError, SynthesisResult};
use crate::core::voice_catalog::VoiceCatalog;

/// Allowed speaking-rate adjustment, in percent.
pub const RATE_PERCENT_MIN: i32 = -50;
pub const RATE_PERCENT_MAX: i32 = 50;

/// Allowed pitch adjustment, in Hz.
pub const PITCH_HZ_MIN: i32 = -20;
pub const PITCH_HZ_MAX: i32 = 20;

/// Validated synthesis parameters.
///
/// Construction goes through [`validate`]; a value of this type always holds
/// non-empty text, a catalog-resolved voice id, and in-bounds rate/pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisParameters {
    pub text: String,
    pub voice_id: String,
    pub rate_percent: i32,
    pub pitch_hz: i32,
}

/// Validates raw input and produces [`SynthesisParameters`].
///
/// # Errors
///
/// - [`SynthesisError::EmptyInput`] for empty or whitespace-only text
/// - [`SynthesisError::UnknownVoice`] if the label does not resolve
/// - [`SynthesisError::OutOfRange`] if rate or pitch falls outside its bounds
pub fn validate(
    catalog: &VoiceCatalog,
    raw_text: &str,
    raw_voice_label: &str,
    raw_rate: i32,
    raw_pitch: i32,
) -> SynthesisResult<SynthesisParameters> {
    if raw_text.trim().is_empty() {
        return Err(SynthesisError::EmptyInput);
    }

    let voice_id = catalog.resolve(raw_voice_label)?.to_string();

    if !(RATE_PERCENT_MIN..=RATE_PERCENT_MAX).contains(&raw_rate) {
        return Err(SynthesisError::OutOfRange {
            field: "rate",
            value: raw_rate,
            min: RATE_PERCENT_MIN,
            max: RATE_PERCENT_MAX,
        });
    }

    if !(PITCH_HZ_MIN..=PITCH_HZ_MAX).contains(&raw_pitch) {
        return Err(SynthesisError::OutOfRange {
            field: "pitch",
            value: raw_pitch,
            min: PITCH_HZ_MIN,
            max: PITCH_HZ_MAX,
        });
    }

    Ok(SynthesisParameters {
        text: raw_text.to_string(),
        voice_id,
        rate_percent: raw_rate,
        pitch_hz: raw_pitch,
    })
}
