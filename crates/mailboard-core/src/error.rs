//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A lifecycle action applied to a record in the wrong state.
    #[error("Invalid transition: cannot {action} a record in '{from}' state")]
    InvalidTransition {
        /// State the record was in.
        from: &'static str,
        /// Action that was attempted.
        action: &'static str,
    },

    /// A shortcut with the same title already exists.
    #[error("Shortcut already exists: {0}")]
    DuplicateShortcut(String),

    /// Report dimensions that cannot be paginated.
    #[error("Invalid report dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width that was rejected.
        width: f64,
        /// Height that was rejected.
        height: f64,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
