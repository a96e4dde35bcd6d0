//! Summarizer error types.

use thiserror::Error;

/// Errors that can occur while generating a summary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Configuration problem (missing API key, bad client setup).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure reaching the API.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered successfully but the body was not usable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
