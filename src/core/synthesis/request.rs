//! Wire-level synthesis request construction.
//!
//! Converts validated [`SynthesisParameters`] into the provider's request
//! shape. The provider requires rate and pitch as explicitly signed strings
//! (`+0%`, `-12Hz`); the sign must be present even for zero. The SSML body
//! wraps the text in a voice element with a prosody adjustment, following the
//! `application/ssml+xml` contract of the neural TTS endpoint.

use super::params::SynthesisParameters;

/// Provider-facing synthesis request.
///
/// Derived from validated parameters; disposable after the call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    /// Signed percentage string, e.g. `+0%`, `-25%`.
    pub rate: String,
    /// Signed Hz string, e.g. `+0Hz`, `-12Hz`.
    pub pitch: String,
}

/// Builds the wire-shaped request from validated parameters.
///
/// Pure function; assumes pre-validated input and has no failure modes.
pub fn build(params: &SynthesisParameters) -> SynthesisRequest {
    SynthesisRequest {
        text: params.text.clone(),
        voice_id: params.voice_id.clone(),
        rate: format!("{:+}%", params.rate_percent),
        pitch: format!("{:+}Hz", params.pitch_hz),
    }
}

impl SynthesisRequest {
    /// Renders the SSML document sent to the provider.
    pub fn to_ssml(&self) -> String {
        let language = language_for_voice(&self.voice_id);
        let escaped_text = escape_xml(&self.text);
        format!(
            "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{language}'>\
             <voice name='{voice}'>\
             <prosody rate='{rate}' pitch='{pitch}'>{escaped_text}</prosody>\
             </voice></speak>",
            voice = self.voice_id,
            rate = self.rate,
            pitch = self.pitch,
        )
    }
}

/// Derives the BCP-47 language tag from a provider voice id.
///
/// Voice ids are of the form `{lang}-{region}-{Name}Neural`; the first two
/// segments are the language tag. Falls back to `en-US` for ids that do not
/// follow the pattern.
pub fn language_for_voice(voice_id: &str) -> &str {
    let mut dashes = voice_id.char_indices().filter(|(_, c)| *c == '-');
    let _ = dashes.next();
    match dashes.next() {
        Some((idx, _)) => &voice_id[..idx],
        None => "en-US",
    }
}

/// Escapes special XML characters for use in the SSML body.
pub fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
