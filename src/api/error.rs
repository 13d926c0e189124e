//! Error types exposed by the review backend layer.

use thiserror::Error;

/// Errors surfaced while talking to the review backend or preparing a request.
///
/// The first three variants form the failure taxonomy the dashboard reacts
/// to; the remainder cover local start-up and delivery concerns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The request could not complete (connection refused, timeout, DNS).
    #[error("network error talking to the review backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status or an unreadable body.
    #[error("review backend returned status {status}: {message}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body or decoding failure describing the problem.
        message: String,
    },

    /// An operation was invoked without the local state it requires.
    #[error("{message}")]
    LocalPrecondition {
        /// Description of the missing precondition.
        message: String,
    },

    /// The requested export format is not one the client supports.
    #[error("unsupported export format '{format}': valid options are json, text, markdown, csv")]
    UnsupportedExportFormat {
        /// The rejected format token.
        format: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Details reported by the TUI runtime.
        message: String,
    },
}

impl ReviewError {
    /// Builds a [`ReviewError::LocalPrecondition`] from a message.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::LocalPrecondition {
            message: message.into(),
        }
    }
}
