//! Color temperature and tint as one joint chroma shift.

use tone_color::{rgb_to_yuv, yuv_to_rgb};
use tone_core::{LinearRgb, Yuv};

/// How far one full unit of temperature or tint moves the chroma axes.
pub const UV_SHIFT_SCALE: f64 = 0.10;

/// Shifts color temperature and tint through BT.709 YUV.
///
/// Temperature moves the two chroma axes in opposition (toward orange or
/// toward blue); tint moves them together (toward magenta or toward
/// green). Luma is untouched:
///
/// ```text
/// U' = U - temperature * 0.10 + tint * 0.10
/// V' = V + temperature * 0.10 + tint * 0.10
/// ```
///
/// Channels are clamped to [0, 1] after conversion back, since a chroma
/// shift near the gamut edge can leave RGB.
///
/// # Example
///
/// ```rust
/// use tone_core::LinearRgb;
/// use tone_ops::temperature_tint;
///
/// let gray = LinearRgb::splat(0.5);
/// let same = temperature_tint(gray, 0.0, 0.0);
/// assert!((same.r - gray.r).abs() < 1e-12);
///
/// // Warming raises red and lowers blue.
/// let warm = temperature_tint(gray, 0.5, 0.0);
/// assert!(warm.r > gray.r && warm.b < gray.b);
/// ```
#[inline]
pub fn temperature_tint(c: LinearRgb, temperature: f64, tint: f64) -> LinearRgb {
    let yuv = rgb_to_yuv(c);
    let shifted = Yuv::new(
        yuv.y,
        yuv.u - temperature * UV_SHIFT_SCALE + tint * UV_SHIFT_SCALE,
        yuv.v + temperature * UV_SHIFT_SCALE + tint * UV_SHIFT_SCALE,
    );
    yuv_to_rgb(shifted).clamp01()
}
