//! Structural validation of an analysis record.
//!
//! The archive schema is fixed and small, so instead of a schema engine the
//! validator checks the handful of structural rules the remote validator
//! would reject. All violations are collected; checking never stops at the
//! first problem.

use std::fmt;

use chrono::{NaiveDate, Utc};

use ena_model::AnalysisRecord;

use crate::error::{OutputError, Result};

/// One structural rule the record breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The analysis document requires a TITLE element.
    MissingTitle,
    /// The analysis document requires exactly one STUDY_REF.
    MissingStudyReference,
    /// The analysis document requires at least one FILE.
    NoFiles,
    /// A FILE element without a filename attribute.
    FileMissingName { index: usize },
    /// A FILE element without a checksum attribute.
    FileMissingChecksum { index: usize },
    /// A HOLD action whose date is not in the future.
    HoldDateNotInFuture { date: NaiveDate },
}

impl Violation {
    pub fn message(&self) -> String {
        match self {
            Self::MissingTitle => "ANALYSIS requires a TITLE element but none was set".to_string(),
            Self::MissingStudyReference => {
                "ANALYSIS requires a STUDY_REF element but no study accession was set".to_string()
            }
            Self::NoFiles => "ANALYSIS requires at least one FILE element".to_string(),
            Self::FileMissingName { index } => {
                format!("FILE {} has no filename", index + 1)
            }
            Self::FileMissingChecksum { index } => {
                format!("FILE {} has no checksum", index + 1)
            }
            Self::HoldDateNotInFuture { date } => {
                format!("HOLD date {date} is not in the future")
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Check the analysis-document shape. Pure: the same record always yields
/// the same violations.
pub fn validate_analysis(record: &AnalysisRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    if record.title.is_none() {
        violations.push(Violation::MissingTitle);
    }
    if record.study_accession.is_none() {
        violations.push(Violation::MissingStudyReference);
    }
    if record.files.is_empty() {
        violations.push(Violation::NoFiles);
    }
    for (index, file) in record.files.iter().enumerate() {
        if file.file_name.is_none() {
            violations.push(Violation::FileMissingName { index });
        }
        if file.checksum.is_none() {
            violations.push(Violation::FileMissingChecksum { index });
        }
    }
    violations
}

/// Check the submission-envelope shape.
///
/// The builder only ever records future hold dates, so this catches records
/// assembled by hand.
pub fn validate_submission(record: &AnalysisRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(date) = record.hold_date
        && date <= Utc::now().date_naive()
    {
        violations.push(Violation::HoldDateNotInFuture { date });
    }
    violations
}

/// Validate both document shapes, failing with the complete violation list.
pub fn ensure_valid(record: &AnalysisRecord) -> Result<()> {
    let mut violations = validate_submission(record);
    violations.extend(validate_analysis(record));
    if violations.is_empty() {
        Ok(())
    } else {
        Err(OutputError::schema_validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use ena_model::{FileEntry, FileType};

    fn valid_record() -> AnalysisRecord {
        let mut record = AnalysisRecord {
            title: Some("title".to_string()),
            study_accession: Some("SRP011907".to_string()),
            ..AnalysisRecord::default()
        };
        let mut file = FileEntry::new(FileType::Vcf);
        file.file_name = Some("calls.vcf".to_string());
        file.checksum = Some("10899e2ca49b37c8c37c4763616496ac".to_string());
        record.files.push(file);
        record
    }

    #[test]
    fn valid_record_has_no_violations() {
        assert!(validate_analysis(&valid_record()).is_empty());
        assert!(validate_submission(&valid_record()).is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let record = valid_record();
        assert!(ensure_valid(&record).is_ok());
        assert!(ensure_valid(&record).is_ok());
    }

    #[test]
    fn empty_record_reports_every_violation() {
        let violations = validate_analysis(&AnalysisRecord::default());
        assert_eq!(
            violations,
            vec![
                Violation::MissingTitle,
                Violation::MissingStudyReference,
                Violation::NoFiles,
            ]
        );
    }

    #[test]
    fn bare_file_entry_reports_name_and_checksum() {
        let mut record = valid_record();
        record.files.push(FileEntry::new(FileType::Bam));
        let violations = validate_analysis(&record);
        assert!(violations.contains(&Violation::FileMissingName { index: 1 }));
        assert!(violations.contains(&Violation::FileMissingChecksum { index: 1 }));
    }

    #[test]
    fn past_hold_date_is_a_violation() {
        let mut record = valid_record();
        let yesterday = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .expect("yesterday");
        record.hold_date = Some(yesterday);
        assert_eq!(
            validate_submission(&record),
            vec![Violation::HoldDateNotInFuture { date: yesterday }]
        );
    }

    #[test]
    fn ensure_valid_joins_messages_with_newlines() {
        let err = ensure_valid(&AnalysisRecord::default()).expect_err("must fail");
        assert_eq!(err.to_string().lines().count(), 3);
    }
}
