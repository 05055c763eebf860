//! Error types for UniProt retrieval
//!
//! Normalization never fails; every variant here comes from configuration or
//! from talking to the REST API.

use thiserror::Error;

/// Result type alias for UniProt operations
pub type Result<T> = std::result::Result<T, UniProtError>;

#[derive(Error, Debug)]
pub enum UniProtError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("not found: {url}")]
    NotFound { url: String },

    /// Non-success status other than 404
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl UniProtError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Only transport-level failures are worth another attempt; a malformed
    /// body or a definite HTTP answer will come back the same way.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
