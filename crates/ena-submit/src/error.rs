//! Error types for the submission wire protocol.

use thiserror::Error;

/// Errors raised while configuring or performing a submission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// A required credential or endpoint value is missing.
    #[error("'{0}' is not configured")]
    Configuration(String),

    /// The endpoint file could not be read or parsed.
    #[error("endpoint file '{path}': {message}")]
    EndpointFile {
        /// Path of the endpoint file.
        path: String,
        /// What went wrong reading or parsing it.
        message: String,
    },

    /// Network or TLS failure reaching the endpoint; no result was produced
    /// and the caller may retry externally.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was neither the known busy message nor XML that
    /// can be streamed.
    #[error("receipt parse error: {0}")]
    ReceiptParse(String),

    /// FTP transfer failure.
    #[error("FTP error: {0}")]
    Ftp(String),

    /// I/O error during payload handling.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<suppaftp::FtpError> for SubmitError {
    fn from(err: suppaftp::FtpError) -> Self {
        Self::Ftp(err.to_string())
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;
