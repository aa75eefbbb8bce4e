//! Configuration for the SpeechCraft server.
//!
//! Configuration comes from environment variables, with a `.env` file loaded
//! first when present. Defaults cover everything except the provider
//! subscription key, which is required and validated at startup.

use std::env;
use std::time::Duration;

/// Server configuration
///
/// Contains everything needed to run the server:
/// - bind settings (host, port)
/// - provider credential and region
/// - optional bound on provider calls
/// - per-session opening credit balance
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Subscription key for the neural TTS provider.
    pub subscription_key: String,
    /// Provider region, selects the regional synthesis endpoint.
    pub region: String,
    /// Bound on each provider call. `None` disables the timeout.
    pub request_timeout_seconds: Option<u64>,

    /// Opening credit balance for each new session.
    pub starting_credits: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables with sensible defaults,
    /// loading a `.env` file first if one exists.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `PORT`, `TTS_REQUEST_TIMEOUT_SECONDS`, or `STARTING_CREDITS` are malformed
    /// - `TTS_SUBSCRIPTION_KEY` is missing or empty
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3002".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        let subscription_key =
            env::var("TTS_SUBSCRIPTION_KEY").map_err(|_| "TTS_SUBSCRIPTION_KEY must be set")?;
        if subscription_key.trim().is_empty() {
            return Err("TTS_SUBSCRIPTION_KEY must not be empty".into());
        }

        let region = env::var("TTS_REGION").unwrap_or_else(|_| "eastus".to_string());

        let request_timeout_seconds = match env::var("TTS_REQUEST_TIMEOUT_SECONDS") {
            Ok(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|e| format!("Invalid TTS_REQUEST_TIMEOUT_SECONDS: {e}"))?,
            ),
            Err(_) => None,
        };

        let starting_credits = match env::var("STARTING_CREDITS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| format!("Invalid STARTING_CREDITS: {e}"))?,
            Err(_) => crate::core::credits::STARTING_CREDITS,
        };

        Ok(Self {
            host,
            port,
            subscription_key,
            region,
            request_timeout_seconds,
            starting_credits,
        })
    }

    /// Returns the socket address string to bind to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the provider call bound as a `Duration`, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3002,
            subscription_key: "test-key".to_string(),
            region: "eastus".to_string(),
            request_timeout_seconds: None,
            starting_credits: 10_000,
        }
    }

    #[test]
    fn test_address() {
        assert_eq!(test_config().address(), "127.0.0.1:3002");
    }

    #[test]
    fn test_request_timeout_unset_means_none() {
        assert!(test_config().request_timeout().is_none());
    }

    #[test]
    fn test_request_timeout_configured() {
        let mut config = test_config();
        config.request_timeout_seconds = Some(30);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }
}
