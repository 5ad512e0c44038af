//! iconforge CLI - brand logo and favicon generator
//!
//! Writes `logo.png` and `favicon.ico` into a public asset directory, drawing
//! the first character of the brand name on the brand color.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use iconforge::png::PngOptions;
use iconforge::source::{logo_source, Artwork, SolidFill};
use iconforge::{ico, output, png, Rgb};

/// Side of the placeholder favicon written when the letter mark fails.
const PLACEHOLDER_FAVICON_SIZE: u32 = 16;

/// Generate a PNG logo and a multi-resolution ICO favicon for a brand.
#[derive(Parser, Debug)]
#[command(name = "iconforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Brand name (its first character becomes the mark)
    #[arg(long)]
    brand_name: String,

    /// Background color, `#rgb` or `#rrggbb`
    #[arg(long, default_value = "#111827", value_parser = iconforge::parse_hex_color)]
    primary_color: Rgb,

    /// Output directory for logo.png and favicon.ico
    #[arg(long, default_value = "public", value_name = "DIR")]
    public_dir: PathBuf,

    /// Logo side length in pixels
    #[arg(long, default_value = "512", value_parser = clap::value_parser!(u32).range(1..=4096))]
    logo_size: u32,

    /// Favicon resolutions, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "16,32,48",
        value_parser = clap::value_parser!(u32).range(1..=256)
    )]
    favicon_sizes: Vec<u32>,

    /// PNG compression level (1-9, higher = smaller file)
    #[arg(short = 'c', long, default_value = "9", value_parser = clap::value_parser!(u8).range(1..=9))]
    compression: u8,

    /// Overwrite existing files
    #[arg(short, long)]
    force: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Encoded logo and favicon, ready to persist.
struct Assets {
    logo: Vec<u8>,
    favicon: Vec<u8>,
    placeholder: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = PngOptions {
        compression_level: args.compression,
    };

    let start = Instant::now();
    let assets = match render_letter_marks(&args, &options) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("[warn] Logo/favicon generation failed, using placeholders: {e:#}");
            render_placeholders(&args, &options)?
        }
    };
    let encode_time = start.elapsed();

    let logo_path = args.public_dir.join("logo.png");
    let favicon_path = args.public_dir.join("favicon.ico");
    output::write_assets(
        &[
            (&logo_path, assets.logo.as_slice()),
            (&favicon_path, assets.favicon.as_slice()),
        ],
        args.force,
    )
    .with_context(|| format!("writing assets to {}", args.public_dir.display()))?;

    let label = if assets.placeholder { "Placeholder " } else { "" };
    println!("{label}Logo saved to {}", logo_path.display());
    println!("{label}Favicon saved to {}", favicon_path.display());

    if args.verbose {
        eprintln!("  Brand color: {}", args.primary_color);
        eprintln!("  Logo: {}px, {} bytes", args.logo_size, assets.logo.len());
        eprintln!(
            "  Favicon: {:?}, {} bytes",
            args.favicon_sizes,
            assets.favicon.len()
        );
        eprintln!("  Encode time: {:.2?}", encode_time);
    }
    Ok(())
}

/// Letter mark at every requested size; fails if any size can't show it.
fn render_letter_marks(args: &Args, options: &PngOptions) -> Result<Assets> {
    let logo = require_letter(logo_source(
        &args.brand_name,
        args.logo_size,
        args.primary_color,
    ))?;
    let favicons = args
        .favicon_sizes
        .iter()
        .map(|&size| require_letter(logo_source(&args.brand_name, size, args.primary_color)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Assets {
        logo: png::encode_with_options(&logo, options)?,
        favicon: ico::encode(&favicons)?,
        placeholder: false,
    })
}

fn require_letter(art: Artwork) -> Result<Artwork> {
    if art.is_placeholder() {
        anyhow::bail!("brand initial has no built-in glyph");
    }
    Ok(art)
}

/// Flat brand-color logo and a single 16px favicon.
fn render_placeholders(args: &Args, options: &PngOptions) -> Result<Assets> {
    let logo = SolidFill::square(args.logo_size, args.primary_color);
    let favicon = SolidFill::square(PLACEHOLDER_FAVICON_SIZE, args.primary_color);
    Ok(Assets {
        logo: png::encode_with_options(&logo, options).context("encoding placeholder logo")?,
        favicon: ico::encode(&[favicon]).context("encoding placeholder favicon")?,
        placeholder: true,
    })
}
