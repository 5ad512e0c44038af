//! PNG encoder: 8-bit truecolor, no alpha, no interlacing.
//!
//! The output is always `signature, IHDR, IDAT..., IEND`. Every scanline uses
//! filter type 0 (None); the scanline stream is compressed as one zlib stream
//! and then sliced across as many IDAT chunks as needed.

pub mod chunk;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::compress::deflate_compress;
use crate::error::{Error, Result};

/// PNG file signature (magic bytes).
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Maximum supported image dimension.
const MAX_DIMENSION: u32 = 1 << 24;

/// IHDR color type 2: truecolor without alpha.
const COLOR_TYPE_RGB: u8 = 2;

/// Scanline filter type 0.
const FILTER_NONE: u8 = 0;

/// Largest IDAT payload written in a single chunk.
const IDAT_CHUNK_SIZE: usize = 256 * 1024;

/// PNG encoding options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngOptions {
    /// zlib compression level (1-9, default 9).
    pub compression_level: u8,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self::max_compression()
    }
}

impl PngOptions {
    /// Fastest compression; larger files.
    pub fn fast() -> Self {
        Self {
            compression_level: 1,
        }
    }

    /// Smallest files.
    pub fn max_compression() -> Self {
        Self {
            compression_level: 9,
        }
    }
}

/// Encode a pixel buffer as PNG with default options.
///
/// # Example
///
/// ```rust
/// use iconforge::{png, Rgb, RgbImage};
///
/// let red = RgbImage::filled(1, 1, Rgb::new(255, 0, 0));
/// let bytes = png::encode(&red).unwrap();
/// assert_eq!(&bytes[..8], &png::PNG_SIGNATURE);
/// ```
pub fn encode<B: PixelBuffer + ?Sized>(buffer: &B) -> Result<Vec<u8>> {
    encode_with_options(buffer, &PngOptions::default())
}

/// Encode a pixel buffer as PNG with custom options.
pub fn encode_with_options<B: PixelBuffer + ?Sized>(
    buffer: &B,
    options: &PngOptions,
) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    encode_into(&mut output, buffer, options)?;
    Ok(output)
}

/// Encode into a caller-provided buffer.
///
/// The `output` buffer is cleared before writing, so one allocation can be
/// reused across encodes. On error its contents are unspecified.
pub fn encode_into<B: PixelBuffer + ?Sized>(
    output: &mut Vec<u8>,
    buffer: &B,
    options: &PngOptions,
) -> Result<()> {
    let (width, height) = buffer.dimensions();
    validate(width, height, options)?;

    let raw = scanlines(buffer);
    let compressed = deflate_compress(&raw, options.compression_level)?;
    debug!(
        "png: {}x{} -> {} raw bytes, {} compressed",
        width,
        height,
        raw.len(),
        compressed.len()
    );

    output.clear();
    output.reserve(PNG_SIGNATURE.len() + compressed.len() + 3 * chunk::CHUNK_OVERHEAD + 13);
    output.extend_from_slice(&PNG_SIGNATURE);
    write_ihdr(output, width, height);
    write_idat_chunks(output, &compressed);
    write_iend(output);
    Ok(())
}

fn validate(width: u32, height: u32, options: &PngOptions) -> Result<()> {
    if !(1..=9).contains(&options.compression_level) {
        return Err(Error::InvalidCompressionLevel(options.compression_level));
    }

    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::ImageTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Unfiltered scanline stream: each row is a filter byte followed by
/// `width` RGB triples, `height * (1 + 3 * width)` bytes in total.
fn scanlines<B: PixelBuffer + ?Sized>(buffer: &B) -> Vec<u8> {
    let (width, height) = buffer.dimensions();
    let row_len = 1 + 3 * width as usize;
    let mut raw = Vec::with_capacity(row_len * height as usize);
    for y in 0..height {
        raw.push(FILTER_NONE);
        for x in 0..width {
            raw.extend_from_slice(&buffer.get(x, y).to_array());
        }
    }
    raw
}

/// Write IHDR (image header) chunk.
fn write_ihdr(output: &mut Vec<u8>, width: u32, height: u32) {
    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = 8; // bit depth
    ihdr[9] = COLOR_TYPE_RGB;
    // compression, filter method and interlace are all 0
    chunk::write_chunk(output, b"IHDR", &ihdr);
}

fn write_idat_chunks(output: &mut Vec<u8>, compressed: &[u8]) {
    for chunk_data in compressed.chunks(IDAT_CHUNK_SIZE) {
        chunk::write_chunk(output, b"IDAT", chunk_data);
    }
}

fn write_iend(output: &mut Vec<u8>) {
    chunk::write_chunk(output, b"IEND", &[]);
}
