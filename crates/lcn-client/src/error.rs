//! LearnCard Network API client error types.

/// Errors from LearnCard Network API calls.
#[derive(Debug, thiserror::Error)]
pub enum LcnApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The network API returned a non-2xx status.
    #[error("LCN API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body did not match the expected model.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// The request was rejected before it was sent.
    #[error("invalid request for {endpoint}: {reason}")]
    InvalidRequest { endpoint: String, reason: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl LcnApiError {
    /// HTTP status returned by the API, if the failure was a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
