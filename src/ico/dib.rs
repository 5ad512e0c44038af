//! The device-independent bitmap stored inside each ICO entry.
//!
//! Layout: a 40-byte BITMAPINFOHEADER whose height is twice the image height,
//! the 32-bit BGRA color plane stored bottom-up, then a 1-bit AND mask (also
//! bottom-up) with each row padded to a 4-byte boundary.

use crate::buffer::PixelBuffer;

/// Size of BITMAPINFOHEADER.
pub const BITMAPINFOHEADER_LEN: usize = 40;

/// Bits per pixel of the color plane.
pub const BIT_COUNT: u16 = 32;

/// Bytes in one AND-mask row for an image `width` pixels wide.
#[inline]
pub const fn mask_row_len(width: u32) -> usize {
    (width as usize).div_ceil(32) * 4
}

/// Total DIB length for a `width` x `height` image.
#[inline]
pub const fn dib_len(width: u32, height: u32) -> usize {
    let (w, h) = (width as usize, height as usize);
    BITMAPINFOHEADER_LEN + w * h * 4 + mask_row_len(width) * h
}

/// Append the DIB for `image` to `output`.
///
/// Every pixel is written fully opaque and the AND mask is all zeros.
pub fn write_dib<B: PixelBuffer + ?Sized>(output: &mut Vec<u8>, image: &B) {
    let (width, height) = image.dimensions();
    let start = output.len();

    // BITMAPINFOHEADER
    output.extend_from_slice(&(BITMAPINFOHEADER_LEN as u32).to_le_bytes());
    output.extend_from_slice(&(width as i32).to_le_bytes());
    output.extend_from_slice(&((height as i32) * 2).to_le_bytes()); // color + mask
    output.extend_from_slice(&1u16.to_le_bytes()); // planes
    output.extend_from_slice(&BIT_COUNT.to_le_bytes());
    // compression (BI_RGB), image size, x/y pixels per meter, colors used,
    // colors important
    output.extend_from_slice(&[0u8; 24]);

    for y in (0..height).rev() {
        for x in 0..width {
            let px = image.get(x, y);
            output.extend_from_slice(&[px.b, px.g, px.r, 0xFF]);
        }
    }

    let mask_len = mask_row_len(width) * height as usize;
    output.resize(output.len() + mask_len, 0);

    debug_assert_eq!(output.len() - start, dib_len(width, height));
}
