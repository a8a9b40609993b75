//! # tone-io
//!
//! Image adapter for the tone pipeline.
//!
//! The pipeline in `tone-ops` transforms one pixel at a time and knows
//! nothing about rasters, codecs, or bit depths. This crate owns that
//! boundary: it walks an 8-bit RGBA buffer, feeds each pixel through
//! [`tone_ops::transform`] as normalized floats, and quantizes the
//! result back (`round(v * 255)`). Alpha is carried through untouched.
//!
//! Pixels are independent, so rows are processed in parallel with
//! `rayon` (the `parallel` feature, on by default). The result is
//! identical at any parallelism degree.
//!
//! # Example
//!
//! ```rust,no_run
//! use tone_core::Params;
//! use tone_io::enhance_file;
//!
//! let params = Params::NEUTRAL.with_brightness(0.65);
//! enhance_file("in.jpg", "out.jpg", params)?;
//! # Ok::<(), tone_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tone-core`] / [`tone-ops`] - the pipeline
//! - [`image`] - raster decoding and encoding
//! - [`rayon`] - row parallelism (optional)
//!
//! # Used By
//!
//! - `tone-cli` - the `tone` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::debug;

use tone_core::{EncodedRgb, Params};
use tone_ops::transform;

pub use error::{IoError, IoResult};

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

fn enhance_row(row: &mut [u8], params: Params) {
    for px in row.chunks_exact_mut(CHANNELS) {
        let c = EncodedRgb::from_srgb8(px[0], px[1], px[2]);
        let [r, g, b] = transform(c, params).to_srgb8();
        px[0] = r;
        px[1] = g;
        px[2] = b;
        // px[3] (alpha) passes through untouched.
    }
}

/// Applies the tone adjustment to an RGBA image in place.
///
/// Rows are processed in parallel when the `parallel` feature is
/// enabled. Alpha bytes are never read or written.
pub fn enhance_rgba(img: &mut RgbaImage, params: Params) {
    let width = img.width() as usize;
    let height = img.height();
    debug!(width, height, "enhancing image");

    if width == 0 {
        return;
    }

    let buf: &mut [u8] = img;
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buf.par_chunks_mut(width * CHANNELS)
            .for_each(|row| enhance_row(row, params));
    }
    #[cfg(not(feature = "parallel"))]
    for row in buf.chunks_mut(width * CHANNELS) {
        enhance_row(row, params);
    }
}

/// Applies the tone adjustment to any decoded image.
///
/// The input is converted to 8-bit RGBA first, whatever its native
/// representation, and a new buffer is returned.
pub fn enhance_image(img: &DynamicImage, params: Params) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    enhance_rgba(&mut rgba, params);
    rgba
}

/// Reads an image file, applies the tone adjustment, and writes the
/// result.
///
/// Both formats are inferred from the file extensions.
pub fn enhance_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    params: Params,
) -> IoResult<()> {
    let img = image::open(input.as_ref())?;
    let out = enhance_image(&img, params);
    out.save(output.as_ref())?;
    Ok(())
}

/// Reads a [`Params`] value from a JSON file.
///
/// Controls omitted from the file default to neutral.
pub fn read_params(path: impl AsRef<Path>) -> IoResult<Params> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
