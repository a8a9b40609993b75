//! Contrast as a slope remap around mid-gray.

use std::f64::consts::FRAC_PI_4;

use tone_core::LinearRgb;
use tone_transfer::{eotf, oetf};

/// Adjusts contrast by steepening or flattening the curve around the
/// encoded mid-gray point.
///
/// The remap happens in the sRGB-encoded domain, where mid-gray sits at
/// 0.5 perceptually:
///
/// ```text
/// coef = tan(amount + 1) * pi/4
/// out  = decode(max(0, (encode(in) - 0.5) * coef + 0.5))
/// ```
///
/// The coefficient curve is `tan(amount + 1)`, not `tan(amount) + 1`:
/// at `amount = 0` the slope is `tan(1) * pi/4 ~= 1.223`, so only the
/// 0.5 pivot itself (and the endpoints, via the boundary clamps) is a
/// fixed point of the neutral setting. Downstream output compatibility
/// depends on this exact curve.
///
/// The `max(0, ..)` floor keeps the decode input non-negative; values
/// pushed above 1 saturate at the decode boundary.
///
/// # Example
///
/// ```rust
/// use tone_core::LinearRgb;
/// use tone_ops::contrast;
///
/// // Raising contrast pushes a dark pixel darker.
/// let dark = LinearRgb::splat(0.1);
/// assert!(contrast(dark, 0.5).g < contrast(dark, 0.0).g);
/// ```
#[inline]
pub fn contrast(c: LinearRgb, amount: f64) -> LinearRgb {
    let coef = (amount + 1.0).tan() * FRAC_PI_4;
    c.map(|v| eotf(((oetf(v) - 0.5) * coef + 0.5).max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tone_transfer::srgb;

    #[test]
    fn test_mid_gray_is_fixed() {
        let mid = LinearRgb::splat(srgb::eotf(0.5));
        let out = contrast(mid, 0.0);
        assert_abs_diff_eq!(out.g, mid.g, epsilon = 3e-3);
    }

    #[test]
    fn test_endpoints_fixed_at_slope_one_or_steeper() {
        // With coef >= 1 the remap pushes the endpoints into the
        // boundary clamps, so they stay put.
        for amount in [0.0, 0.25, 0.5] {
            assert_eq!(contrast(LinearRgb::BLACK, amount), LinearRgb::BLACK);
            assert_eq!(contrast(LinearRgb::WHITE, amount), LinearRgb::WHITE);
        }
    }

    #[test]
    fn test_low_contrast_compresses_toward_pivot() {
        // With coef < 1 even the endpoints move toward mid-gray.
        let lifted = contrast(LinearRgb::BLACK, -0.5);
        let dimmed = contrast(LinearRgb::WHITE, -0.5);
        assert!(lifted.g > 0.0);
        assert!(dimmed.g < 1.0);
    }

    #[test]
    fn test_neutral_coefficient_is_not_unity() {
        // tan(1) * pi/4, the literal formula.
        let coef = 1.0f64.tan() * FRAC_PI_4;
        assert_abs_diff_eq!(coef, 1.2231851666, epsilon = 1e-9);
        // So a non-pivot pixel moves even at amount 0.
        let c = LinearRgb::splat(srgb::eotf(0.25));
        assert!(contrast(c, 0.0).g < c.g);
    }

    #[test]
    fn test_spreads_around_pivot() {
        let dark = LinearRgb::splat(srgb::eotf(0.3));
        let light = LinearRgb::splat(srgb::eotf(0.7));
        assert!(contrast(dark, 0.5).g < contrast(dark, 0.0).g);
        assert!(contrast(light, 0.5).g > contrast(light, 0.0).g);
    }

    #[test]
    fn test_shadow_floor() {
        // At maximum contrast the darkest tones hit the max(0, ..) floor
        // rather than going negative.
        let out = contrast(LinearRgb::splat(0.001), 0.5);
        assert!(out.min_channel() >= 0.0);
    }
}
