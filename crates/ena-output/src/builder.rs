//! Builders producing a validated document pair from typed fields.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use ena_model::{AnalysisRecord, FileEntry, FileType, Mapping};

use crate::analysis_xml::write_analysis_xml;
use crate::checksum::md5_of_file;
use crate::error::Result;
use crate::submission_xml::write_submission_xml;
use crate::validate::ensure_valid;

/// The two serialized documents, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    /// The SUBMISSION envelope.
    pub submission: String,
    /// The ANALYSIS metadata record.
    pub analysis: String,
}

/// Descriptor builder for one deposited file.
///
/// The constructor fixes the file type, which irrevocably selects the shape
/// of the nested analysis-type block.
#[derive(Debug, Clone)]
pub struct AnalysisFile {
    entry: FileEntry,
}

impl AnalysisFile {
    fn new(file_type: FileType) -> Self {
        Self {
            entry: FileEntry::new(file_type),
        }
    }

    /// A variant-call file; serialized as a SEQUENCE_VARIATION analysis.
    pub fn vcf() -> Self {
        Self::new(FileType::Vcf)
    }

    /// A binary alignment file; serialized as a REFERENCE_ALIGNMENT analysis.
    pub fn bam() -> Self {
        Self::new(FileType::Bam)
    }

    /// A compressed alignment file; serialized as a REFERENCE_ALIGNMENT
    /// analysis.
    pub fn cram() -> Self {
        Self::new(FileType::Cram)
    }

    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.entry.file_name = Some(name.into());
        self
    }

    /// Use the basename of a data file as the filename.
    #[must_use]
    pub fn file_path(self, path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.file_name(name)
    }

    /// Supply the MD5 checksum as a literal hex string.
    #[must_use]
    pub fn md5(mut self, checksum: impl Into<String>) -> Self {
        self.entry.checksum = Some(checksum.into());
        self
    }

    /// Derive the MD5 checksum by streaming the file's bytes.
    ///
    /// For identical bytes this serializes exactly like [`Self::md5`] with
    /// the corresponding literal.
    pub fn md5_of(self, path: &Path) -> Result<Self> {
        let checksum = md5_of_file(path)?;
        Ok(self.md5(checksum))
    }

    #[must_use]
    pub fn assembly_accession(mut self, accession: impl Into<String>) -> Self {
        self.entry.assembly_block.set_assembly(accession);
        self
    }

    /// Append one chromosome-label/sequence-accession pair; output order is
    /// call order.
    #[must_use]
    pub fn sequence(mut self, label: impl Into<String>, accession: impl Into<String>) -> Self {
        self.entry.assembly_block.add_sequence(label, accession);
        self
    }

    /// Append a collected sequence mapping.
    #[must_use]
    pub fn sequence_mapping(mut self, mapping: Mapping) -> Self {
        self.entry.assembly_block.sequences_mut().extend(mapping);
        self
    }

    /// The finished file entry.
    pub fn into_entry(self) -> FileEntry {
        self.entry
    }
}

/// Top-level builder for one deposit.
///
/// Setters may run in any order. Identity fields shared by both documents
/// (alias, center name, broker name) are kept in one record and serialized
/// into both at [`build`](Self::build), so repeated setters leave both
/// documents consistent with the last value.
#[derive(Debug, Clone, Default)]
pub struct AnalysisBuilder {
    record: AnalysisRecord,
}

impl AnalysisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.record.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn center_name(mut self, center_name: impl Into<String>) -> Self {
        self.record.center_name = Some(center_name.into());
        self
    }

    #[must_use]
    pub fn analysis_center(mut self, analysis_center: impl Into<String>) -> Self {
        self.record.analysis_center = Some(analysis_center.into());
        self
    }

    #[must_use]
    pub fn broker_name(mut self, broker_name: impl Into<String>) -> Self {
        self.record.broker_name = Some(broker_name.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    /// Request deferred public visibility until `date`.
    ///
    /// Compared against the wall clock when this setter runs: only a
    /// strictly-future date is recorded; a past or present date is silently
    /// dropped.
    #[must_use]
    pub fn hold_date(mut self, date: NaiveDate) -> Self {
        if date > Utc::now().date_naive() {
            self.record.hold_date = Some(date);
        } else {
            debug!("Ignoring hold date {date}: not in the future");
        }
        self
    }

    /// Append one sample label/accession reference.
    #[must_use]
    pub fn sample(mut self, label: impl Into<String>, accession: impl Into<String>) -> Self {
        self.record.samples.add(label, accession);
        self
    }

    /// Append a collected sample mapping.
    #[must_use]
    pub fn sample_mapping(mut self, mapping: Mapping) -> Self {
        self.record.samples.extend(mapping);
        self
    }

    #[must_use]
    pub fn study_reference(mut self, accession: impl Into<String>) -> Self {
        self.record.study_accession = Some(accession.into());
        self
    }

    #[must_use]
    pub fn run_reference(mut self, accession: impl Into<String>) -> Self {
        self.record.run_accession = Some(accession.into());
        self
    }

    /// Append one file block; the builder accepts any number, of possibly
    /// different types.
    #[must_use]
    pub fn file(mut self, file: AnalysisFile) -> Self {
        self.record.files.push(file.into_entry());
        self
    }

    /// The record as configured so far.
    pub fn record(&self) -> &AnalysisRecord {
        &self.record
    }

    /// Validate the record against both document shapes and serialize the
    /// pair. Fails with the complete violation list if either shape is
    /// invalid.
    pub fn build(self) -> Result<DocumentPair> {
        ensure_valid(&self.record)?;
        debug!(
            files = self.record.files.len(),
            samples = self.record.samples.len(),
            "Serializing document pair"
        );
        Ok(DocumentPair {
            submission: write_submission_xml(&self.record)?,
            analysis: write_analysis_xml(&self.record)?,
        })
    }
}
