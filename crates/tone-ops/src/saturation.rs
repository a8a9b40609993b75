//! Saturation as a chroma scale through HSV.

use tone_color::{hsv_to_rgb, rgb_to_hsv};
use tone_core::{Hsv, LinearRgb};

/// Scales color saturation through HSV.
///
/// The input is clamped to [0, 1], converted to HSV, and the S channel
/// is multiplied by `amount + 1`:
///
/// ```text
/// S' = S * (amount + 1)
/// ```
///
/// `amount = 0` is the identity, `amount = -0.5` halves the chroma, and
/// `amount = 0.5` scales it by 1.5. The product is not clamped before
/// reconversion - an S above 1 makes `hsv_to_rgb` emit out-of-range
/// channels, and the pipeline's exit clamp absorbs them.
///
/// # Example
///
/// ```rust
/// use tone_core::LinearRgb;
/// use tone_ops::saturation;
///
/// let c = LinearRgb::new(0.8, 0.4, 0.4);
/// let muted = saturation(c, -0.5);
/// // Value (the max channel) holds; the others rise toward it.
/// assert_eq!(muted.r, c.r);
/// assert!(muted.g > c.g);
/// ```
#[inline]
pub fn saturation(c: LinearRgb, amount: f64) -> LinearRgb {
    let hsv = rgb_to_hsv(c.clamp01());
    hsv_to_rgb(Hsv::new(hsv.h, hsv.s * (amount + 1.0), hsv.v))
}
