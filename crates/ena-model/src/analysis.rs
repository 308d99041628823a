//! Typed model of one analysis deposit.
//!
//! An [`AnalysisRecord`] carries everything needed to serialize the linked
//! SUBMISSION and ANALYSIS documents. It is plain data: builders in
//! `ena-output` fill it in during a single configuration pass, the writers
//! serialize it, and nothing here performs I/O.

use chrono::NaiveDate;

use crate::mapping::Mapping;

/// Experiment type emitted for sequence-variation analyses.
pub const WHOLE_GENOME_SEQUENCING: &str = "Whole genome sequencing";

/// Checksum method literal; the archive accepts nothing else here.
pub const CHECKSUM_METHOD_MD5: &str = "MD5";

/// Closed set of deposited file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Variant-call format.
    Vcf,
    /// Binary alignment.
    Bam,
    /// Compressed alignment.
    Cram,
}

impl FileType {
    /// Wire literal used in the `filetype` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vcf => "vcf",
            Self::Bam => "bam",
            Self::Cram => "cram",
        }
    }
}

/// Per-file analysis-type block, selected once by the owning file's type.
///
/// Variant-call files describe sequence variation against a reference;
/// alignment files describe the reference alignment itself. The variant
/// carries only the fields its XML shape serializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyBlock {
    SequenceVariation {
        /// Assembly accession for `ASSEMBLY/STANDARD`, if any.
        assembly: Option<String>,
        /// Ordered chromosome-label to sequence-accession pairs.
        sequences: Mapping,
    },
    ReferenceAlignment {
        assembly: Option<String>,
        sequences: Mapping,
    },
}

impl AssemblyBlock {
    /// The block variant matching a file type.
    pub fn for_file_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Vcf => Self::SequenceVariation {
                assembly: None,
                sequences: Mapping::new(),
            },
            FileType::Bam | FileType::Cram => Self::ReferenceAlignment {
                assembly: None,
                sequences: Mapping::new(),
            },
        }
    }

    pub fn set_assembly(&mut self, accession: impl Into<String>) {
        match self {
            Self::SequenceVariation { assembly, .. } | Self::ReferenceAlignment { assembly, .. } => {
                *assembly = Some(accession.into());
            }
        }
    }

    pub fn assembly(&self) -> Option<&str> {
        match self {
            Self::SequenceVariation { assembly, .. } | Self::ReferenceAlignment { assembly, .. } => {
                assembly.as_deref()
            }
        }
    }

    /// Append one chromosome/accession pair, preserving call order.
    pub fn add_sequence(&mut self, label: impl Into<String>, accession: impl Into<String>) {
        self.sequences_mut().add(label, accession);
    }

    pub fn sequences(&self) -> &Mapping {
        match self {
            Self::SequenceVariation { sequences, .. }
            | Self::ReferenceAlignment { sequences, .. } => sequences,
        }
    }

    pub fn sequences_mut(&mut self) -> &mut Mapping {
        match self {
            Self::SequenceVariation { sequences, .. }
            | Self::ReferenceAlignment { sequences, .. } => sequences,
        }
    }
}

/// One deposited file plus its analysis-type block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub file_name: Option<String>,
    pub file_type: FileType,
    /// Lower-case MD5 hex digest.
    pub checksum: Option<String>,
    pub assembly_block: AssemblyBlock,
}

impl FileEntry {
    /// New entry for a file type; the assembly-block variant is fixed here
    /// and never changes afterwards.
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_name: None,
            file_type,
            checksum: None,
            assembly_block: AssemblyBlock::for_file_type(file_type),
        }
    }
}

/// Everything needed to serialize one submission/analysis document pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisRecord {
    pub alias: Option<String>,
    pub center_name: Option<String>,
    pub analysis_center: Option<String>,
    pub broker_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Ordered sample label/accession references.
    pub samples: Mapping,
    pub study_accession: Option<String>,
    pub run_accession: Option<String>,
    /// Public-visibility hold date; only ever a strictly-future date.
    pub hold_date: Option<NaiveDate>,
    /// One or more deposited files, in configuration order.
    pub files: Vec<FileEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_literals() {
        assert_eq!(FileType::Vcf.as_str(), "vcf");
        assert_eq!(FileType::Bam.as_str(), "bam");
        assert_eq!(FileType::Cram.as_str(), "cram");
    }

    #[test]
    fn vcf_selects_sequence_variation() {
        let entry = FileEntry::new(FileType::Vcf);
        assert!(matches!(
            entry.assembly_block,
            AssemblyBlock::SequenceVariation { .. }
        ));
    }

    #[test]
    fn alignments_select_reference_alignment() {
        for file_type in [FileType::Bam, FileType::Cram] {
            let entry = FileEntry::new(file_type);
            assert!(matches!(
                entry.assembly_block,
                AssemblyBlock::ReferenceAlignment { .. }
            ));
        }
    }

    #[test]
    fn sequences_keep_call_order() {
        let mut block = AssemblyBlock::for_file_type(FileType::Bam);
        block.add_sequence("2", "GK000032.1");
        block.add_sequence("1", "GK000031.2");
        let pairs: Vec<_> = block.sequences().iter().collect();
        assert_eq!(pairs, vec![("2", "GK000032.1"), ("1", "GK000031.2")]);
    }
}
