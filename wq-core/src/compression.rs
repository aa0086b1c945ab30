/// Decompression for gzip-compressed CSV inputs
use crate::error::{Result, WqError};
use flate2::read::GzDecoder;
use std::io::Read;

/// Decompress a gzip stream into raw bytes.
///
/// # Errors
///
/// Returns `WqError::Decompression` if the input is not valid gzip.
pub fn gunzip(input: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(input);
    let mut buf: Vec<u8> = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .map_err(|e| WqError::Decompression(format!("gzip decompression failed: {}", e)))?;
    Ok(buf)
}
