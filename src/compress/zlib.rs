//! zlib (RFC 1950) wrapping of DEFLATE, delegated to `flate2`.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

/// Compress `data` into a complete zlib stream: two-byte header, DEFLATE
/// blocks, then the Adler-32 of the uncompressed input.
///
/// `level` is clamped to 0-9 by `flate2`; callers validate the 1-9 range.
pub fn deflate_compress(data: &[u8], level: u8) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(data.len() / 2 + 64),
        Compression::new(u32::from(level)),
    );
    encoder
        .write_all(data)
        .map_err(|e| Error::CompressionFailure(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| Error::CompressionFailure(e.to_string()))
}
