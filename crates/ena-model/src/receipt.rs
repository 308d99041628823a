//! Structured outcome of one submission attempt.

use serde::{Deserialize, Serialize};

/// Parsed server receipt.
///
/// Every field defaults to empty/false and is only set when the server's
/// response actually carried it; a partially-populated result is a valid
/// outcome, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Whether the archive accepted the deposit.
    pub success: bool,
    /// Accession assigned to the submission envelope (`ERA…`).
    pub submission_accession: String,
    /// Accession assigned to the analysis record (`ERZ…`).
    pub analysis_accession: String,
    /// Server error text, empty on success.
    pub error: String,
}

impl SubmissionResult {
    /// Result representing a reachable but failing server, carrying its
    /// error text verbatim.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let result = SubmissionResult::default();
        assert!(!result.success);
        assert!(result.submission_accession.is_empty());
        assert!(result.analysis_accession.is_empty());
        assert!(result.error.is_empty());
    }

    #[test]
    fn failure_sets_only_error() {
        let result = SubmissionResult::failure("no space left");
        assert!(!result.success);
        assert_eq!(result.error, "no space left");
        assert!(result.submission_accession.is_empty());
    }
}
