//! Per-channel sRGB encode/decode.
//!
//! The only conversions that change between gamma modes; everything else
//! in this crate is plain arithmetic.

use tone_core::{EncodedRgb, LinearRgb};
use tone_transfer::{eotf, oetf};

/// Decodes an sRGB color to linear light, channel by channel.
///
/// Channels are clamped to [0, 1] at the transfer boundary.
///
/// # Example
///
/// ```rust
/// use tone_color::decode;
/// use tone_core::EncodedRgb;
///
/// let mid = decode(EncodedRgb::splat(0.5));
/// assert!((mid.r - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(c: EncodedRgb) -> LinearRgb {
    LinearRgb::new(eotf(c.r), eotf(c.g), eotf(c.b))
}

/// Encodes a linear-light color to sRGB, channel by channel.
///
/// Channels are clamped to [0, 1] at the transfer boundary, so
/// over-range linear values saturate to white rather than extrapolate.
#[inline]
pub fn encode(c: LinearRgb) -> EncodedRgb {
    EncodedRgb::new(oetf(c.r), oetf(c.g), oetf(c.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = encode(decode(EncodedRgb::splat(v)));
            assert_abs_diff_eq!(back.g, v, epsilon = 3e-3);
        }
    }

    #[test]
    fn test_black_white_exact() {
        assert_eq!(decode(EncodedRgb::splat(0.0)), LinearRgb::BLACK);
        assert_eq!(decode(EncodedRgb::splat(1.0)), LinearRgb::WHITE);
        assert_eq!(encode(LinearRgb::BLACK), EncodedRgb::splat(0.0));
        assert_eq!(encode(LinearRgb::WHITE), EncodedRgb::splat(1.0));
    }

    #[test]
    fn test_over_range_saturates() {
        assert_eq!(encode(LinearRgb::new(1.7, -0.2, 1.0)), EncodedRgb::new(1.0, 0.0, 1.0));
    }
}
