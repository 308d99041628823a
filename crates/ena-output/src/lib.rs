//! Builds and validates the linked SUBMISSION and ANALYSIS XML documents
//! for an ENA deposit.
//!
//! - **Builders** (`builder`): [`AnalysisBuilder`] collects typed fields and
//!   file blocks in one configuration pass and produces a validated
//!   [`DocumentPair`].
//! - **Validation** (`validate`): structural checks against the fixed
//!   archive shape, reporting every violation at once.
//! - **Serialization** (`analysis_xml`, `submission_xml`): quick-xml writers
//!   emitting the exact element and attribute names the archive expects.
//! - **Checksums** (`checksum`): streaming MD5 for deposited data files.

pub mod analysis_xml;
pub mod builder;
pub mod checksum;
pub mod common;
pub mod error;
pub mod submission_xml;
pub mod validate;

pub use analysis_xml::write_analysis_xml;
pub use builder::{AnalysisBuilder, AnalysisFile, DocumentPair};
pub use checksum::md5_of_file;
pub use error::{OutputError, Result};
pub use submission_xml::write_submission_xml;
pub use validate::{Violation, ensure_valid, validate_analysis, validate_submission};
