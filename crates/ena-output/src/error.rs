//! Error types for document production.

use thiserror::Error;

use crate::validate::Violation;

/// Errors raised while building, validating, or serializing documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The record would produce a document the archive schema rejects.
    ///
    /// The message lists every violation found, newline-joined, so a caller
    /// sees the complete list in one failure.
    #[error("{}", .violations.join("\n"))]
    SchemaValidation {
        /// All violation messages, in check order.
        violations: Vec<String>,
    },

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error while reading a data file or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// Build a schema-validation error from the collected violations.
    pub fn schema_validation(violations: Vec<Violation>) -> Self {
        Self::SchemaValidation {
            violations: violations.iter().map(|v| v.message()).collect(),
        }
    }
}

/// Result type alias for document production.
pub type Result<T> = std::result::Result<T, OutputError>;
