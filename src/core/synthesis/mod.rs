//! Speech synthesis pipeline: validation, wire-request construction, and the
//! provider client.

pub mod client;
pub mod error;
pub mod params;
pub mod request;

pub use client::{
    NeuralTtsClient, SpeechSynthesizer, OUTPUT_FORMAT, OUTPUT_FORMAT_HEADER,
    SUBSCRIPTION_KEY_HEADER, tts_endpoint_for_region,
};
pub use error::{SynthesisError, SynthesisResult};
pub use params::{
    validate, SynthesisParameters, PITCH_HZ_MAX, PITCH_HZ_MIN, RATE_PERCENT_MAX, RATE_PERCENT_MIN,
};
pub use request::{build, SynthesisRequest};
