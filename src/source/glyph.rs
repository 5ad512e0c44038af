//! Letter-mark tiles drawn from a built-in 5x7 bitmap font.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::{Error, Result};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Target glyph height as a percentage of the tile side.
const GLYPH_HEIGHT_PERCENT: u32 = 65;

/// Rows top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

#[rustfmt::skip]
const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

fn glyph_for(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => LETTERS.get((c as u8 - b'A') as usize),
        c @ '0'..='9' => DIGITS.get((c as u8 - b'0') as usize),
        _ => None,
    }
}

/// Integer cell scale for a glyph on a `size` px tile: about 65% of the side,
/// reduced until the glyph fits. Zero means even 1:1 does not fit.
fn glyph_scale(size: u32) -> u32 {
    let target = u64::from(size) * u64::from(GLYPH_HEIGHT_PERCENT) / 100 / u64::from(GLYPH_HEIGHT);
    // At most 65/700 of `size`, so it fits back into a u32.
    let mut scale = (target as u32).max(1);
    while scale > 0 && (GLYPH_WIDTH * scale > size || GLYPH_HEIGHT * scale > size) {
        scale -= 1;
    }
    scale
}

/// A square tile of `background` with one character drawn in `foreground`,
/// centered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMark {
    size: u32,
    glyph: &'static Glyph,
    scale: u32,
    origin: (u32, u32),
    background: Rgb,
    foreground: Rgb,
}

impl LetterMark {
    /// White `ch` on a `size` x `size` tile of `background`.
    ///
    /// Letters are drawn upper-case. Fails for characters outside `A-Z`,
    /// `a-z` and `0-9`, and for a zero size.
    pub fn new(ch: char, size: u32, background: Rgb) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimensions {
                width: 0,
                height: 0,
            });
        }
        let glyph = glyph_for(ch).ok_or(Error::UnsupportedGlyph(ch))?;
        let scale = glyph_scale(size);
        let origin = (
            (size - GLYPH_WIDTH * scale) / 2,
            (size - GLYPH_HEIGHT * scale) / 2,
        );
        Ok(Self {
            size,
            glyph,
            scale,
            origin,
            background,
            foreground: Rgb::WHITE,
        })
    }

    /// Replace the stroke color.
    pub fn with_foreground(mut self, foreground: Rgb) -> Self {
        self.foreground = foreground;
        self
    }

    /// Side length of one font cell in pixels (0 when the tile is too small).
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn is_stroke(&self, x: u32, y: u32) -> bool {
        if self.scale == 0 {
            return false;
        }
        let (ox, oy) = self.origin;
        if x < ox || y < oy {
            return false;
        }
        let col = (x - ox) / self.scale;
        let row = (y - oy) / self.scale;
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.glyph[row as usize] >> (GLYPH_WIDTH - 1 - col) & 1 == 1
    }
}

impl PixelBuffer for LetterMark {
    fn width(&self) -> u32 {
        self.size
    }

    fn height(&self) -> u32 {
        self.size
    }

    fn get(&self, x: u32, y: u32) -> Rgb {
        if self.is_stroke(x, y) {
            self.foreground
        } else {
            self.background
        }
    }
}
