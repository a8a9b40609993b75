//! The canonical per-pixel transform.

use tone_color::{decode, encode};
use tone_core::{EncodedRgb, Params};

use crate::{brightness, contrast, saturation, temperature_tint};

/// Applies the full tone adjustment to one sRGB pixel.
///
/// The operator order is fixed and order-sensitive:
///
/// 1. Clamp every control to [0, 1], then center it on 0
/// 2. Decode sRGB to linear
/// 3. Temperature/tint
/// 4. Brightness
/// 5. Contrast
/// 6. Saturation
/// 7. Encode back to sRGB and clamp
///
/// Total over every input: out-of-range controls are clamped, boundary
/// colors are clamped at the conversions, and the degenerate HSV cases
/// are guarded, so every (pixel, params) pair produces a defined result
/// in [0, 1] with no error path.
///
/// Pixels are independent - the function holds no state between calls
/// and may be invoked from any number of threads at once.
///
/// # Example
///
/// ```rust
/// use tone_core::{EncodedRgb, Params};
/// use tone_ops::transform;
///
/// // Mid-gray is a fixed point of the neutral setting.
/// let out = transform(EncodedRgb::splat(0.5), Params::NEUTRAL);
/// assert!((out.g - 0.5).abs() < 1e-3);
/// ```
pub fn transform(pixel: EncodedRgb, params: Params) -> EncodedRgb {
    let p = params.clamped();
    let brightness_amt = p.brightness - 0.5;
    let contrast_amt = p.contrast - 0.5;
    let saturation_amt = p.saturation - 0.5;
    let temperature_amt = p.temperature - 0.5;
    let tint_amt = p.tint - 0.5;

    let mut c = decode(pixel);
    c = temperature_tint(c, temperature_amt, tint_amt);
    c = brightness(c, brightness_amt);
    c = contrast(c, contrast_amt);
    c = saturation(c, saturation_amt);
    encode(c).clamp01()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_params_match_clamped() {
        let pixel = EncodedRgb::new(0.6, 0.4, 0.2);
        let wild = Params {
            brightness: 3.0,
            contrast: -1.0,
            saturation: 0.5,
            temperature: 1.7,
            tint: -0.2,
        };
        let clamped = Params {
            brightness: 1.0,
            contrast: 0.0,
            saturation: 0.5,
            temperature: 1.0,
            tint: 0.0,
        };
        assert_eq!(transform(pixel, wild), transform(pixel, clamped));
    }

    #[test]
    fn test_black_white_fixed_under_neutral() {
        assert_eq!(
            transform(EncodedRgb::splat(0.0), Params::NEUTRAL),
            EncodedRgb::splat(0.0)
        );
        assert_eq!(
            transform(EncodedRgb::splat(1.0), Params::NEUTRAL),
            EncodedRgb::splat(1.0)
        );
    }
}
