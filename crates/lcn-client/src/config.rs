//! LearnCard Network client configuration.
//!
//! A single base URL addresses the brain service; every resource group
//! hangs off it. Defaults point to the production network. Override via
//! environment variables or explicit construction for staging/testing.

use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

use crate::retry::RetryPolicy;

/// Default production endpoint of the LearnCard Network API.
pub const DEFAULT_API_URL: &str = "https://network.learncard.com/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the LearnCard Network API.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct LcnApiConfig {
    /// Base URL of the API, including its path prefix.
    /// Default: <https://network.learncard.com/api>
    pub api_url: Url,
    /// Bearer token (API key or auth-grant token). Wiped from memory on drop.
    pub api_token: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Resending of idempotent requests after transport failures.
    pub retry: RetryPolicy,
}

impl std::fmt::Debug for LcnApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcnApiConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

impl LcnApiConfig {
    /// Build a configuration for an explicit URL and token.
    pub fn new(api_url: Url, api_token: impl Into<String>) -> Self {
        Self {
            api_url,
            api_token: Zeroizing::new(api_token.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LCN_API_URL` (default: `https://network.learncard.com/api`)
    /// - `LCN_API_TOKEN` (required)
    /// - `LCN_TIMEOUT_SECS` (default: 30)
    /// - `LCN_MAX_RETRIES` (default: 3)
    /// - `LCN_RETRY_BASE_MS` (default: 200)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = std::env::var("LCN_API_TOKEN").map_err(|_| ConfigError::MissingToken)?;
        if api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(Self {
            api_url: env_url("LCN_API_URL", DEFAULT_API_URL)?,
            api_token: Zeroizing::new(api_token),
            timeout_secs: env_parse("LCN_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
            retry: retry_from_env(),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(port: u16, token: &str) -> Result<Self, ConfigError> {
        let api_url = Url::parse(&format!("http://127.0.0.1:{port}/api"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            api_url,
            api_token: Zeroizing::new(token.to_string()),
            timeout_secs: 5,
            retry: RetryPolicy::none(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}

fn retry_from_env() -> RetryPolicy {
    let default = RetryPolicy::default();
    RetryPolicy {
        max_retries: env_parse("LCN_MAX_RETRIES").unwrap_or(default.max_retries),
        base_delay: env_parse("LCN_RETRY_BASE_MS")
            .map(Duration::from_millis)
            .unwrap_or(default.base_delay),
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LCN_API_TOKEN environment variable is required")]
    MissingToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
