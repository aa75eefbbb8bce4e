//! Neural text-to-speech provider client.
//!
//! Performs the single asynchronous round trip to the provider's regional
//! Cognitive Services endpoint. The request carries the SSML body built by
//! the request module plus the subscription key and output format headers.
//! One attempt per call, no retry; a failure propagates immediately with the
//! underlying cause preserved. Synthesis is atomic from the caller's side: it
//! yields a complete MP3 byte sequence or an error, never a partial result.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::error::{SynthesisError, SynthesisResult};
use super::request::SynthesisRequest;
use crate::core::artifact::AudioArtifact;

/// HTTP header carrying the provider subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// HTTP header selecting the output audio format.
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// Output format requested for every synthesis: 24kHz mono MP3.
pub const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// User-Agent sent with provider requests.
const USER_AGENT: &str = "speechcraft-synthesis-service";

/// Builds the regional TTS endpoint URL.
pub fn tts_endpoint_for_region(region: &str) -> String {
    format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1")
}

/// Seam between the orchestration and the external provider.
///
/// The production implementation is [`NeuralTtsClient`]; tests substitute a
/// stub so the pipeline can run without network access.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes speech for the given request.
    ///
    /// Returns a complete audio artifact on success. Fails with
    /// [`SynthesisError::Provider`] on any provider-side or transport
    /// failure, or [`SynthesisError::Timeout`] if the configured bound
    /// elapses first.
    async fn synthesize(&self, request: &SynthesisRequest) -> SynthesisResult<AudioArtifact>;
}

/// HTTP client for the neural TTS provider.
pub struct NeuralTtsClient {
    client: reqwest::Client,
    subscription_key: String,
    endpoint: String,
    /// Bound on the provider call. `None` means no timeout is enforced.
    request_timeout: Option<Duration>,
}

impl NeuralTtsClient {
    /// Creates a client for the given region.
    ///
    /// `request_timeout` bounds each synthesis call; when unset the call
    /// runs until the provider responds or the connection fails.
    pub fn new(
        subscription_key: String,
        region: &str,
        request_timeout: Option<Duration>,
    ) -> SynthesisResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SynthesisError::Provider(e.to_string()))?;

        Ok(Self {
            client,
            subscription_key,
            endpoint: tts_endpoint_for_region(region),
            request_timeout,
        })
    }

    /// Returns the endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the provider HTTP request for a synthesis call.
    fn build_http_request(&self, request: &SynthesisRequest) -> reqwest::RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, OUTPUT_FORMAT)
            .header("User-Agent", USER_AGENT)
            .body(request.to_ssml())
    }

    async fn send_request(&self, request: &SynthesisRequest) -> SynthesisResult<AudioArtifact> {
        debug!(
            voice = %request.voice_id,
            rate = %request.rate,
            pitch = %request.pitch,
            "sending synthesis request"
        );

        let response = self
            .build_http_request(request)
            .send()
            .await
            .map_err(|e| SynthesisError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Provider(format!(
                "provider returned {status}: {body}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Provider(e.to_string()))?;

        info!(bytes = bytes.len(), "synthesis complete");
        Ok(AudioArtifact::mp3(bytes))
    }
}

#[async_trait]
impl SpeechSynthesizer for NeuralTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> SynthesisResult<AudioArtifact> {
        match self.request_timeout {
            Some(bound) => tokio::time::timeout(bound, self.send_request(request))
                .await
                .map_err(|_| SynthesisError::Timeout(bound))?,
            None => self.send_request(request).await,
        }
    }
}
