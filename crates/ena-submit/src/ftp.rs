//! FTP transfer of the raw data file.
//!
//! Thin byte-stream operations: every call logs in, performs one operation,
//! and always attempts logout, even when the operation failed mid-way.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use suppaftp::FtpStream;
use suppaftp::types::FileType as FtpFileType;
use tracing::{info, warn};

use crate::config::{Credentials, Endpoints};
use crate::error::{Result, SubmitError};

/// Transfer buffer for data-file uploads (10 MiB).
const TRANSFER_BUFFER_SIZE: usize = 10 * 1024 * 1024;

/// FTP control port.
const FTP_PORT: u16 = 21;

/// Upload a data file to the archive's FTP host in binary mode.
///
/// The remote name is the file's basename, matching the filename recorded
/// in the analysis document.
pub fn upload_data_file(
    endpoints: &Endpoints,
    credentials: &Credentials,
    path: &Path,
) -> Result<()> {
    let name = basename(path)?;
    with_ftp(endpoints, credentials, |ftp| {
        ftp.transfer_type(FtpFileType::Binary)?;
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(TRANSFER_BUFFER_SIZE, file);
        let bytes = ftp.put_file(&name, &mut reader)?;
        info!("Uploaded {name} ({bytes} bytes)");
        Ok(())
    })
}

/// Delete a previously uploaded data file by its remote name.
pub fn delete_data_file(
    endpoints: &Endpoints,
    credentials: &Credentials,
    name: &str,
) -> Result<()> {
    with_ftp(endpoints, credentials, |ftp| {
        ftp.rm(name)?;
        info!("Deleted {name}");
        Ok(())
    })
}

/// Run one operation inside a connect/login/quit bracket.
///
/// Teardown runs on every exit path; a failed logout is logged, not
/// propagated over the operation's own outcome.
fn with_ftp<T>(
    endpoints: &Endpoints,
    credentials: &Credentials,
    operation: impl FnOnce(&mut FtpStream) -> Result<T>,
) -> Result<T> {
    let mut ftp = FtpStream::connect((endpoints.ftp_host.as_str(), FTP_PORT))?;
    ftp.login(&credentials.user, &credentials.password)?;
    let outcome = operation(&mut ftp);
    if let Err(err) = ftp.quit() {
        warn!("FTP logout failed: {err}");
    }
    outcome
}

fn basename(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| SubmitError::Ftp(format!("'{}' has no filename", path.display())))
}
