//! Streaming MD5 digests for deposited data files.
//!
//! The archive only accepts MD5 here, so no other algorithm is exposed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use md5::{Digest, Md5};
use tracing::debug;

use crate::error::Result;

/// Buffer size for reading files during checksum computation.
const BUFFER_SIZE: usize = 65536; // 64 KB

/// Compute the MD5 digest of a file as lower-case hex.
///
/// Streams the file through the digest; the content is never held in memory.
pub fn md5_of_file(path: &Path) -> Result<String> {
    debug!("Computing MD5 for: {}", path.display());

    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut hasher = Md5::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let hex_hash = hex::encode(hasher.finalize());
    debug!("MD5: {}", hex_hash);
    Ok(hex_hash)
}
