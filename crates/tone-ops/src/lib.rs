//! # tone-ops
//!
//! Tone operators and the per-pixel adjustment pipeline.
//!
//! Four operators, each a pure function from a linear-RGB color and a
//! centered control value in [-0.5, 0.5] (0 = neutral) to a new
//! linear-RGB color:
//!
//! - [`temperature_tint`] - chroma shift through BT.709 YUV
//! - [`brightness`] - per-channel power curve
//! - [`contrast`] - slope remap around mid-gray in the encoded domain
//! - [`saturation`] - chroma scale through HSV
//!
//! [`transform`] composes them in a fixed order into the canonical
//! pixel transform. The order is part of the contract: the operators do
//! not commute, and reordering them changes the visual result.
//!
//! Every function here is total. Parameters and boundary colors are
//! clamped, degenerate conversions are guarded, and no input produces an
//! error or a NaN.
//!
//! # Example
//!
//! ```rust
//! use tone_core::{EncodedRgb, Params};
//! use tone_ops::transform;
//!
//! let warmer = Params::NEUTRAL.with_temperature(0.8);
//! let out = transform(EncodedRgb::splat(0.5), warmer);
//! assert!(out.r > out.b);
//! ```
//!
//! # Dependencies
//!
//! - [`tone-core`] - color and parameter types
//! - [`tone-color`] - color space conversions
//! - [`tone-transfer`] - sRGB transfer functions (contrast re-encodes)
//!
//! # Used By
//!
//! - `tone-io` - applies [`transform`] across image buffers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod brightness;
mod contrast;
mod pipeline;
mod saturation;
mod temperature;

pub use brightness::brightness;
pub use contrast::contrast;
pub use pipeline::transform;
pub use saturation::saturation;
pub use temperature::temperature_tint;

pub use tone_core::Params;
