//! Brightness as a per-channel power curve.

use tone_core::LinearRgb;

/// Steepness of the brightness exponent response.
pub const BRIGHTNESS_SCALE: f64 = 1.5;

/// Adjusts brightness by raising each channel to a single exponent.
///
/// ```text
/// out = in ^ (1 / (1 + 1.5 * amount))
/// ```
///
/// At `amount = 0` the exponent is 1 and the operator is the identity.
/// Positive amounts flatten the exponent toward 0 (brighten), negative
/// amounts steepen it (darken). Both endpoints are fixed: 0 and 1 map to
/// themselves at every amount.
///
/// No clamping is performed here; the pipeline clamps at its exit.
///
/// # Example
///
/// ```rust
/// use tone_core::LinearRgb;
/// use tone_ops::brightness;
///
/// let c = LinearRgb::splat(0.25);
/// assert_eq!(brightness(c, 0.0), c);
/// assert!(brightness(c, 0.5).r > c.r);
/// assert!(brightness(c, -0.5).r < c.r);
/// ```
#[inline]
pub fn brightness(c: LinearRgb, amount: f64) -> LinearRgb {
    let exponent = 1.0 / (1.0 + BRIGHTNESS_SCALE * amount);
    c.map(|v| v.powf(exponent))
}
