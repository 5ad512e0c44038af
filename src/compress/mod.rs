//! Checksum and compression primitives used by the PNG writer.
//!
//! The ICO path stores uncompressed DIBs and needs neither.

pub mod crc32;
pub mod zlib;

pub use crc32::{crc32, Crc32};
pub use zlib::deflate_compress;
