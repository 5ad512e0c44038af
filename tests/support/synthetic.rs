//! Synthetic test image generation.
//!
//! Deterministic patterns for controlled testing of the encoders.

use iconforge::{Rgb, RgbImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate a solid color image.
pub fn solid_color(width: u32, height: u32, r: u8, g: u8, b: u8) -> RgbImage {
    RgbImage::filled(width, height, Rgb::new(r, g, b))
}

/// Red increases left to right, green top to bottom.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb::new(
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            (((x + y) * 127) / (width + height).max(1)) as u8,
        )
    })
}

/// Black and white checkerboard with `cell` px squares.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::WHITE
        }
    })
}

/// Uniform random noise from a fixed seed.
pub fn noise(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; width as usize * height as usize * 3];
    rng.fill(data.as_mut_slice());
    RgbImage::new(width, height, data).expect("length matches")
}
