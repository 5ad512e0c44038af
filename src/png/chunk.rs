//! PNG chunk framing.

use crate::compress::Crc32;

/// Length, type and CRC fields around every chunk payload.
pub const CHUNK_OVERHEAD: usize = 12;

/// Append one chunk: big-endian payload length, 4-byte type, payload, then the
/// big-endian CRC-32 of type followed by payload.
pub fn write_chunk(output: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    output.reserve(CHUNK_OVERHEAD + data.len());

    let mut crc = Crc32::new();
    crc.update(chunk_type);
    crc.update(data);

    output.extend_from_slice(&(data.len() as u32).to_be_bytes());
    output.extend_from_slice(chunk_type);
    output.extend_from_slice(data);
    output.extend_from_slice(&crc.finalize().to_be_bytes());
}
