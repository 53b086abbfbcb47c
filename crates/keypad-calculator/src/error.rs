//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A pressed label does not name any key or button
    #[error("Unknown key: '{label}'")]
    UnknownKey {
        /// The offending label
        label: String,
    },

    /// Evaluation ended in the error state
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] crate::core::CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey {
            label: label.into(),
        }
    }
}
