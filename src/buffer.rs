//! Pixel buffers handed to the encoders.
//!
//! Encoders only need three things from a source image: its width, its
//! height and the color at a coordinate. [`PixelBuffer`] captures exactly
//! that, so a solid fill or a procedurally drawn tile can be encoded
//! without first being materialized. [`RgbImage`] is the owned,
//! packed-RGB8 implementation for everything else.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Read-only access to a rectangular grid of RGB pixels.
///
/// Implementations must return a color for every `0 <= x < width()` and
/// `0 <= y < height()`. Encoders never call `get` outside that range.
pub trait PixelBuffer {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color of the pixel at column `x`, row `y` (row 0 is the top).
    fn get(&self, x: u32, y: u32) -> Rgb;

    /// `(width, height)`.
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl<T: PixelBuffer + ?Sized> PixelBuffer for &T {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Rgb {
        (**self).get(x, y)
    }
}

impl<T: PixelBuffer + ?Sized> PixelBuffer for Box<T> {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Rgb {
        (**self).get(x, y)
    }
}

/// Owned image stored as packed RGB8, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Wrap packed RGB bytes. `data` must hold exactly `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::InvalidDataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_array());
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// A single-color image.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Copy any pixel source into owned storage.
    pub fn from_buffer<B: PixelBuffer + ?Sized>(source: &B) -> Self {
        Self::from_fn(source.width(), source.height(), |x, y| source.get(x, y))
    }

    /// Packed RGB bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning its packed bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Packed bytes of row `y`.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 3;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }
}

impl PixelBuffer for RgbImage {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Rgb {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
