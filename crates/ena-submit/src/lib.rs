//! Wire protocol for ENA deposits.
//!
//! - **Configuration** (`config`): credential and endpoint sources, both
//!   failing fast at first use when a value is missing.
//! - **Transport** (`transport`): one multipart HTTPS POST per submission,
//!   with the trust override for the archive's non-standard certificate
//!   confined to the dedicated client.
//! - **Receipt** (`receipt`): single-pass streaming parse of the server
//!   response, including the server-busy literal short-circuit.
//! - **FTP** (`ftp`): binary-mode put/delete of the raw data file with
//!   login/logout bracketing.
//!
//! Every call is synchronous and owns its resources; there is no retry,
//! timeout, or shared state between submissions.

pub mod config;
pub mod error;
pub mod ftp;
pub mod receipt;
pub mod transport;

pub use config::{Credentials, EnaServer, Endpoints};
pub use error::{Result, SubmitError};
pub use ftp::{delete_data_file, upload_data_file};
pub use receipt::{SERVER_BUSY, interpret_response, parse_receipt};
pub use transport::SubmissionClient;

pub use ena_model::SubmissionResult;
