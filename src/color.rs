//! Brand color parsing.
//!
//! Colors arrive from the command line as CSS-style hex strings. Only the
//! `#rgb` and `#rrggbb` forms are accepted; there is no alpha.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque white, used for glyph strokes.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Fallback brand color when none is given (slate-900).
    pub const DEFAULT_BRAND: Rgb = Rgb::new(17, 24, 39);

    /// Build a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_color(s)
    }
}

/// Parse a `#rgb` / `#rrggbb` color.
///
/// Surrounding whitespace is ignored and the leading `#` is optional. An empty
/// string yields [`Rgb::DEFAULT_BRAND`].
pub fn parse_hex_color(value: &str) -> Result<Rgb> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Rgb::DEFAULT_BRAND);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || Error::InvalidHexColor(value.to_string());

    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    match nibbles.as_slice() {
        &[r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        &[r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(
            (r1 << 4) | r2,
            (g1 << 4) | g2,
            (b1 << 4) | b2,
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(parse_hex_color("#111827").unwrap(), Rgb::new(17, 24, 39));
        assert_eq!(parse_hex_color("FF8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_parse_shorthand_expands() {
        assert_eq!(parse_hex_color("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(parse_hex_color("f00").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_hex_color("").unwrap(), Rgb::DEFAULT_BRAND);
        assert_eq!(parse_hex_color("   ").unwrap(), Rgb::DEFAULT_BRAND);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_hex_color("  #00ff00\n").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        for bad in ["#12", "#1234", "#1234567", "#"] {
            assert!(
                matches!(parse_hex_color(bad), Err(Error::InvalidHexColor(ref s)) if s == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(matches!(
            parse_hex_color("#zzzzzz"),
            Err(Error::InvalidHexColor(_))
        ));
        assert!(matches!(
            parse_hex_color("#12345é"),
            Err(Error::InvalidHexColor(_))
        ));
    }

    #[test]
    fn test_hex_display_roundtrip() {
        let c = Rgb::new(17, 24, 39);
        assert_eq!(c.to_hex(), "#111827");
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }
}
