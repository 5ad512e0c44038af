//! Pixel sources for generated brand artwork.
//!
//! The encoders accept any [`PixelBuffer`]; this module supplies the two the
//! command-line tool uses: a letter mark drawn from the brand's first
//! character, and a flat color fill used when the letter mark can't be drawn.

mod glyph;
mod solid;

pub use glyph::LetterMark;
pub use solid::SolidFill;

use log::warn;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// Character used when the brand name is blank.
pub const DEFAULT_MARK: char = 'A';

/// First character of the trimmed brand name, or [`DEFAULT_MARK`].
pub fn first_char(brand: &str) -> char {
    brand.trim().chars().next().unwrap_or(DEFAULT_MARK)
}

/// Square brand artwork: the letter mark when it can be drawn, otherwise a
/// solid fill of the brand color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    /// Brand initial on the brand color.
    Letter(LetterMark),
    /// Brand color only.
    Solid(SolidFill),
}

impl Artwork {
    /// Whether this fell back to a flat fill.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Artwork::Solid(_))
    }
}

impl PixelBuffer for Artwork {
    fn width(&self) -> u32 {
        match self {
            Artwork::Letter(mark) => mark.width(),
            Artwork::Solid(fill) => fill.width(),
        }
    }

    fn height(&self) -> u32 {
        match self {
            Artwork::Letter(mark) => mark.height(),
            Artwork::Solid(fill) => fill.height(),
        }
    }

    fn get(&self, x: u32, y: u32) -> Rgb {
        match self {
            Artwork::Letter(mark) => mark.get(x, y),
            Artwork::Solid(fill) => fill.get(x, y),
        }
    }
}

/// Artwork for `brand` on a `size` px square of `color`.
pub fn logo_source(brand: &str, size: u32, color: Rgb) -> Artwork {
    let ch = first_char(brand);
    match LetterMark::new(ch, size, color) {
        Ok(mark) => Artwork::Letter(mark),
        Err(e) => {
            warn!("letter mark for {ch:?} at {size}px unavailable ({e}); using solid fill");
            Artwork::Solid(SolidFill::square(size, color))
        }
    }
}
