//! Hue/saturation/value conversion.
//!
//! The classic hexcone model. Hue is kept normalized to [0, 1) rather
//! than degrees; saturation and value are ratios of the channel extrema.
//!
//! [`hsv_to_rgb`] does not validate its input: a saturation above 1
//! (which the saturation operator can produce) yields out-of-range RGB
//! channels, and the pipeline's exit clamp is what absorbs them.

use tone_core::{Hsv, LinearRgb};

/// Below this chroma the hue is meaningless and the color is treated as
/// achromatic. Also guards the saturation ratio against division by a
/// near-zero maximum.
const CHROMA_EPS: f64 = 1e-14;

fn hue(c: LinearRgb) -> f64 {
    let max = c.max_channel();
    let min = c.min_channel();

    let mut h = if max == min {
        0.0
    } else if min == c.b {
        60.0 * (c.g - c.r) / (max - min) + 60.0
    } else if min == c.r {
        60.0 * (c.b - c.g) / (max - min) + 180.0
    } else {
        60.0 * (c.r - c.b) / (max - min) + 300.0
    };

    h /= 360.0;
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }
    h
}

fn saturation(c: LinearRgb) -> f64 {
    let max = c.max_channel();
    if max < CHROMA_EPS {
        return 0.0;
    }
    (max - c.min_channel()) / max
}

/// Converts linear RGB to hue/saturation/value.
///
/// # Example
///
/// ```rust
/// use tone_color::rgb_to_hsv;
/// use tone_core::LinearRgb;
///
/// let hsv = rgb_to_hsv(LinearRgb::new(0.0, 1.0, 0.0));
/// assert!((hsv.h - 1.0 / 3.0).abs() < 1e-12); // green
/// assert_eq!(hsv.s, 1.0);
/// assert_eq!(hsv.v, 1.0);
/// ```
#[inline]
pub fn rgb_to_hsv(c: LinearRgb) -> Hsv {
    Hsv::new(hue(c), saturation(c), c.max_channel())
}

/// Converts hue/saturation/value back to linear RGB.
///
/// Near-zero saturation short-circuits to the achromatic gray `(v, v, v)`.
/// Otherwise the hue picks one of six sixty-degree sectors and the
/// channels are reconstructed from the `p`/`q`/`t` intermediates:
///
/// ```text
/// f = frac(h * 6)
/// p = v * (1 - s)
/// q = v * (1 - s * f)
/// t = v * (1 - s * (1 - f))
/// ```
#[inline]
pub fn hsv_to_rgb(c: Hsv) -> LinearRgb {
    let Hsv { h, s, v } = c;

    if s < CHROMA_EPS {
        return LinearRgb::splat(v);
    }

    let h6 = h * 6.0;
    let sector = (h6.floor() as i64).rem_euclid(6) as usize;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => LinearRgb::new(v, t, p),
        1 => LinearRgb::new(q, v, p),
        2 => LinearRgb::new(p, v, t),
        3 => LinearRgb::new(p, q, v),
        4 => LinearRgb::new(t, p, v),
        _ => LinearRgb::new(v, p, q),
    }
}
