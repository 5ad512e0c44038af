//! Single-color pixel source.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// A `width` x `height` rectangle of one color. Holds no pixel storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidFill {
    width: u32,
    height: u32,
    color: Rgb,
}

impl SolidFill {
    /// Rectangle of `color`.
    pub const fn new(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// `size` x `size` square of `color`.
    pub const fn square(size: u32, color: Rgb) -> Self {
        Self::new(size, size, color)
    }

    /// The fill color.
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl PixelBuffer for SolidFill {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, _x: u32, _y: u32) -> Rgb {
        self.color
    }
}
