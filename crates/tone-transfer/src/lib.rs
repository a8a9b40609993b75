//! # tone-transfer
//!
//! sRGB transfer functions for the tone pipeline.
//!
//! Two implementations of the same pair of curves:
//!
//! - [`srgb`] - the exact piecewise IEC 61966-2-1 formulas
//! - [`lut`] - a 1024-entry interpolation table sampled from them
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Mode selection
//!
//! The crate-level [`eotf`] and [`oetf`] consult a process-wide flag and
//! dispatch to the table or the exact formula. The table is the default;
//! it agrees with the exact curves to within the table's quantization
//! step (about 1/1024 of the dynamic range). Call
//! [`set_lut_enabled`]`(false)` to trade the speed back for exactness.
//!
//! Inputs are clamped to [0, 1] at this boundary in both modes - values
//! outside the domain saturate, they are never extrapolated.
//!
//! # Usage
//!
//! ```rust
//! use tone_transfer::{eotf, oetf};
//!
//! let linear = eotf(0.5);
//! let back = oetf(linear);
//! assert!((back - 0.5).abs() < 2e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`tone-core`] - core types
//!
//! # Used By
//!
//! - `tone-color` - per-channel color conversions
//! - `tone-ops` - the contrast operator re-encodes through these curves

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lut;
pub mod srgb;

pub use lut::{eotf, lut_enabled, oetf, set_lut_enabled, LUT_SIZE};
