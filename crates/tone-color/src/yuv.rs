//! BT.709 luma/chroma conversion.
//!
//! A fixed 3x3 matrix pair operating on linear RGB. Used by the
//! temperature/tint operator, which shifts the two chroma axes and
//! converts straight back.
//!
//! # Convention
//!
//! ```text
//! | Y |   |  0.2126   0.7152   0.0722 |   | R |
//! | U | = | -0.09991 -0.33609  0.436  | * | G |
//! | V |   |  0.615   -0.55861 -0.05639|   | B |
//! ```
//!
//! The decode direction uses the literal inverse constants rather than a
//! runtime matrix inversion, so both directions are exact, fixed
//! arithmetic.
//!
//! # Reference
//!
//! ITU-R BT.709 weights, as tabulated at
//! <https://en.wikipedia.org/wiki/Y%E2%80%B2UV>

use tone_core::{LinearRgb, Yuv};

/// Converts linear RGB to BT.709 luma/chroma.
///
/// # Example
///
/// ```rust
/// use tone_color::rgb_to_yuv;
/// use tone_core::LinearRgb;
///
/// // Gray carries no chroma.
/// let yuv = rgb_to_yuv(LinearRgb::splat(0.5));
/// assert!((yuv.y - 0.5).abs() < 1e-12);
/// assert!(yuv.u.abs() < 1e-12);
/// assert!(yuv.v.abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_yuv(c: LinearRgb) -> Yuv {
    Yuv::new(
        0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b,
        -0.09991 * c.r - 0.33609 * c.g + 0.436 * c.b,
        0.615 * c.r - 0.55861 * c.g - 0.05639 * c.b,
    )
}

/// Converts BT.709 luma/chroma back to linear RGB.
///
/// # Formula
///
/// ```text
/// R = Y + 1.28033 * V
/// G = Y - 0.21482 * U - 0.38059 * V
/// B = Y + 2.12798 * U
/// ```
#[inline]
pub fn yuv_to_rgb(c: Yuv) -> LinearRgb {
    LinearRgb::new(
        c.y + 1.28033 * c.v,
        c.y - 0.21482 * c.u - 0.38059 * c.v,
        c.y + 2.12798 * c.u,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // The published constants are rounded to five decimals, so the
    // round trip is exact only to about 1e-5.
    const ROUNDTRIP_TOL: f64 = 1e-4;

    #[test]
    fn test_roundtrip() {
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let c = LinearRgb::new(r as f64 / 10.0, g as f64 / 10.0, b as f64 / 10.0);
                    let back = yuv_to_rgb(rgb_to_yuv(c));
                    assert_abs_diff_eq!(back.r, c.r, epsilon = ROUNDTRIP_TOL);
                    assert_abs_diff_eq!(back.g, c.g, epsilon = ROUNDTRIP_TOL);
                    assert_abs_diff_eq!(back.b, c.b, epsilon = ROUNDTRIP_TOL);
                }
            }
        }
    }

    #[test]
    fn test_white_is_pure_luma() {
        let yuv = rgb_to_yuv(LinearRgb::WHITE);
        assert_abs_diff_eq!(yuv.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(yuv.u, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(yuv.v, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_luma_weights() {
        assert_abs_diff_eq!(rgb_to_yuv(LinearRgb::new(1.0, 0.0, 0.0)).y, 0.2126);
        assert_abs_diff_eq!(rgb_to_yuv(LinearRgb::new(0.0, 1.0, 0.0)).y, 0.7152);
        assert_abs_diff_eq!(rgb_to_yuv(LinearRgb::new(0.0, 0.0, 1.0)).y, 0.0722);
    }

    #[test]
    fn test_chroma_sign() {
        // Blue drives U positive, red drives V positive.
        assert!(rgb_to_yuv(LinearRgb::new(0.0, 0.0, 1.0)).u > 0.4);
        assert!(rgb_to_yuv(LinearRgb::new(1.0, 0.0, 0.0)).v > 0.6);
    }
}
