//! # tone-color
//!
//! Color space conversions for the tone pipeline.
//!
//! Pure, stateless functions converting among the four space-tagged
//! color types from `tone-core`:
//!
//! ```text
//! EncodedRgb <--decode/encode--> LinearRgb <--rgb_to_yuv/yuv_to_rgb--> Yuv
//!                                    |
//!                                    +-----rgb_to_hsv/hsv_to_rgb-----> Hsv
//! ```
//!
//! Each conversion is total and is its own approximate inverse:
//! RGB<->YUV and RGB<->HSV round-trip to within floating-point tolerance,
//! sRGB<->linear round-trips exactly in exact-gamma mode and within the
//! table quantization step in LUT mode.
//!
//! # Modules
//!
//! - [`convert`] - sRGB encode/decode, per channel
//! - [`yuv`] - BT.709 luma/chroma matrix pair
//! - [`hsv`] - hue/saturation/value conversion pair
//!
//! # Dependencies
//!
//! - [`tone-core`] - color types
//! - [`tone-transfer`] - sRGB transfer functions
//!
//! # Used By
//!
//! - `tone-ops` - tone operators and the pixel pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod hsv;
pub mod yuv;

pub use convert::{decode, encode};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use yuv::{rgb_to_yuv, yuv_to_rgb};
