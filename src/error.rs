//! Error types for the iconforge library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for iconforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing or persisting an image.
#[derive(Debug, Error)]
pub enum Error {
    /// Zero width or height.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// Pixel data length doesn't match expected size.
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes provided.
        actual: usize,
    },
    /// Image dimensions exceed maximum supported size.
    #[error("Image {width}x{height} exceeds maximum dimension {max}")]
    ImageTooLarge {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Maximum supported dimension.
        max: u32,
    },
    /// Compression level outside 1-9.
    #[error("Invalid compression level {0}: must be 1-9")]
    InvalidCompressionLevel(u8),
    /// The zlib stream could not be produced.
    #[error("Compression error: {0}")]
    CompressionFailure(String),
    /// ICO encode was called with no images.
    #[error("ICO image set is empty")]
    EmptyImageSet,
    /// More entries than ICONDIR's 16-bit count can hold.
    #[error("ICO image set has {0} entries; at most 65535 are allowed")]
    TooManyImages(usize),
    /// The ICO file would outgrow the 32-bit offsets in its directory.
    #[error("ICO image {index} would end at byte {end}; offsets are limited to 4 GiB")]
    IcoTooLarge {
        /// Position of the first entry that does not fit.
        index: usize,
        /// File length needed through the end of that entry.
        end: u64,
    },
    /// An ICO entry is not square.
    #[error("ICO image {index} is not square: {width}x{height}")]
    NonSquareImage {
        /// Position of the offending image in the input sequence.
        index: usize,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// An ICO entry is wider than a directory entry can describe.
    #[error("ICO image {index} is {size}px; directory entries hold at most 256")]
    DimensionOverflow {
        /// Position of the offending image in the input sequence.
        index: usize,
        /// Side length of the image.
        size: u32,
    },
    /// A brand color string is not `#rgb` or `#rrggbb`.
    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),
    /// The built-in font has no bitmap for this character.
    #[error("No glyph for character {0:?}")]
    UnsupportedGlyph(char),
    /// Refusing to replace an existing output file.
    #[error("{} already exists (use force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
    /// Filesystem failure while writing an output file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
