//! Data model for ENA analysis deposits.
//!
//! Plain types shared by the document writers (`ena-output`) and the wire
//! protocol (`ena-submit`): the analysis record with its per-file entries,
//! the ordered label/accession collector, and the parsed submission result.

pub mod analysis;
pub mod mapping;
pub mod receipt;

pub use analysis::{
    AnalysisRecord, AssemblyBlock, CHECKSUM_METHOD_MD5, FileEntry, FileType,
    WHOLE_GENOME_SEQUENCING,
};
pub use mapping::Mapping;
pub use receipt::SubmissionResult;
