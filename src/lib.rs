//! # iconforge
//!
//! Small, self-contained PNG and ICO encoders for generated brand assets
//! (logos and favicons).
//!
//! Both encoders take a borrowed [`PixelBuffer`] and return the complete file
//! as a `Vec<u8>`; neither keeps state between calls, so they can run on any
//! number of threads at once.
//!
//! ## Features
//!
//! - **PNG**: 8-bit RGB, filter type None, zlib-compressed IDAT
//! - **ICO**: any number of square entries up to 256px, 32-bit BGRA DIBs
//! - Letter-mark and solid-fill pixel sources for brand artwork
//! - Optional `iconforge` command-line tool via the `cli` feature
//!
//! ## Example
//!
//! ```rust
//! use iconforge::{ico, png, Rgb, RgbImage};
//!
//! let tile = RgbImage::filled(16, 16, Rgb::new(17, 24, 39));
//! let png_data = png::encode(&tile).unwrap();
//! let ico_data = ico::encode(&[tile]).unwrap();
//! assert_eq!(&png_data[1..4], b"PNG");
//! assert_eq!(&ico_data[..4], &[0, 0, 1, 0]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod color;
pub mod compress;
pub mod error;
pub mod ico;
pub mod output;
pub mod png;
pub mod source;

pub use buffer::{PixelBuffer, RgbImage};
pub use color::{parse_hex_color, Rgb};
pub use error::{Error, Result};
