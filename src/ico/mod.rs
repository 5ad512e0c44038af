//! ICO encoder: one or more square images, each stored as an uncompressed
//! 32-bit BGRA DIB.
//!
//! File layout: ICONDIR (6 bytes), one 16-byte ICONDIRENTRY per image in input
//! order, then the DIB blocks in the same order. Every entry's offset is known
//! before any pixel data is written, so the whole file is allocated once.

pub mod dib;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Size of the ICONDIR header.
pub const ICONDIR_LEN: usize = 6;

/// Size of one ICONDIRENTRY.
pub const ICONDIRENTRY_LEN: usize = 16;

/// Largest side a directory entry can describe (written as 0).
pub const MAX_ICON_SIZE: u32 = 256;

/// Resource type 1: icon (2 would be a cursor).
const RESOURCE_TYPE_ICON: u16 = 1;

/// Conventional favicon resolutions.
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];

/// One ICONDIRENTRY record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    /// Side length in pixels (1-256).
    pub size: u32,
    /// Length of the entry's DIB block.
    pub bytes_in_res: u32,
    /// Absolute file offset of the DIB block.
    pub image_offset: u32,
}

impl IconDirEntry {
    /// Append the 16-byte little-endian record.
    pub fn write_to(&self, output: &mut Vec<u8>) {
        // 256 does not fit in a byte; the format spells it 0.
        let side = if self.size >= MAX_ICON_SIZE {
            0
        } else {
            self.size as u8
        };
        output.push(side); // width
        output.push(side); // height
        output.push(0); // color count
        output.push(0); // reserved
        output.extend_from_slice(&1u16.to_le_bytes()); // planes
        output.extend_from_slice(&dib::BIT_COUNT.to_le_bytes());
        output.extend_from_slice(&self.bytes_in_res.to_le_bytes());
        output.extend_from_slice(&self.image_offset.to_le_bytes());
    }
}

/// Encode `images` as an ICO file.
///
/// Entries are written in the order given. Every image must be square with a
/// side between 1 and 256.
///
/// # Example
///
/// ```rust
/// use iconforge::{ico, Rgb, RgbImage};
///
/// let icons: Vec<RgbImage> = ico::FAVICON_SIZES
///     .iter()
///     .map(|&s| RgbImage::filled(s, s, Rgb::new(17, 24, 39)))
///     .collect();
/// let bytes = ico::encode(&icons).unwrap();
/// assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 3);
/// ```
pub fn encode<B: PixelBuffer>(images: &[B]) -> Result<Vec<u8>> {
    let entries = plan_entries(images)?;

    let total_len = entries
        .last()
        .map(|e| e.image_offset as usize + e.bytes_in_res as usize)
        .unwrap_or(ICONDIR_LEN);
    let mut output = Vec::with_capacity(total_len);

    output.extend_from_slice(&0u16.to_le_bytes()); // reserved
    output.extend_from_slice(&RESOURCE_TYPE_ICON.to_le_bytes());
    output.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in &entries {
        entry.write_to(&mut output);
    }
    for (image, entry) in images.iter().zip(&entries) {
        debug_assert_eq!(output.len(), entry.image_offset as usize);
        dib::write_dib(&mut output, image);
    }

    debug!(
        "ico: {} entries ({:?}) -> {} bytes",
        entries.len(),
        entries.iter().map(|e| e.size).collect::<Vec<_>>(),
        output.len()
    );
    Ok(output)
}

/// Validate the images and compute every directory entry.
pub fn plan_entries<B: PixelBuffer>(images: &[B]) -> Result<Vec<IconDirEntry>> {
    if images.is_empty() {
        return Err(Error::EmptyImageSet);
    }
    if images.len() > u16::MAX as usize {
        return Err(Error::TooManyImages(images.len()));
    }

    let mut offset = (ICONDIR_LEN + ICONDIRENTRY_LEN * images.len()) as u64;
    let mut entries = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if width != height {
            return Err(Error::NonSquareImage {
                index,
                width,
                height,
            });
        }
        if width > MAX_ICON_SIZE {
            return Err(Error::DimensionOverflow { index, size: width });
        }

        let len = dib::dib_len(width, height) as u64;
        let end = offset + len;
        let (Ok(image_offset), Ok(_)) = (u32::try_from(offset), u32::try_from(end)) else {
            return Err(Error::IcoTooLarge { index, end });
        };
        entries.push(IconDirEntry {
            size: width,
            bytes_in_res: len as u32, // len < end, which fits
            image_offset,
        });
        offset = end;
    }
    Ok(entries)
}
