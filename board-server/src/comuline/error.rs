//! Comuline client error types.

use crate::schedule::TimeError;

/// Errors from the Comuline HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ComulineError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A departure carried a malformed time string
    #[error("invalid departure time: {0}")]
    Time(#[from] TimeError),
}
