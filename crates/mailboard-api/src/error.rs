//! Error types for source API operations.

use reqwest::StatusCode;

/// Result type alias for source API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Source API error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Request rejected by the server.
    #[error("API error ({code}): {message}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
        /// Server-provided error message, or the status reason phrase.
        message: String,
    },
}

impl Error {
    /// Creates a status error, falling back to the status reason phrase when
    /// the server supplied no message.
    pub(crate) fn status(code: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            code.canonical_reason().unwrap_or("unknown error").to_string()
        });
        Self::Status {
            code: code.as_u16(),
            message,
        }
    }
}
