//! Error types for reposcout
//!
//! Covers the whole fetch path: transport failures, API status rejections,
//! and response decoding

use thiserror::Error;

/// Main error type for reposcout operations
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GitHub rate limit exceeded (resets at {reset})")]
    RateLimited { reset: String },

    #[error("Search query rejected: {0}")]
    QueryRejected(String),

    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for reposcout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Check if this error is a rate-limit rejection (retrying immediately is pointless)
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ScoutError::RateLimited { .. })
    }

    /// Check if this error came from the response payload rather than transport
    pub fn is_decode(&self) -> bool {
        matches!(self, ScoutError::Decode(_))
    }
}
