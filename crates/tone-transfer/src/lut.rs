//! Interpolation-table fast path for the sRGB curves.
//!
//! Evaluating the exact power-law formulas costs a `powf` per channel per
//! pixel. The tables here sample each curve at [`LUT_SIZE`] uniformly
//! spaced points and reconstruct intermediate values by linear
//! interpolation, which keeps the error within one quantization step of
//! the table (about 1/1024 of the dynamic range).
//!
//! The tables are built lazily on first use and never change afterwards;
//! any number of threads may read them without coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::srgb;

/// Number of table samples. Kept a power of two so the lower index can be
/// masked instead of bounds-checked.
pub const LUT_SIZE: usize = 1024;

/// Sampled transfer curves. Each table carries one extra entry
/// duplicating the last sample so interpolation at the upper edge never
/// reads past the curve.
struct Tables {
    oetf: [f64; LUT_SIZE + 1],
    eotf: [f64; LUT_SIZE + 1],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

static USE_LUT: AtomicBool = AtomicBool::new(true);

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut t = Tables {
            oetf: [0.0; LUT_SIZE + 1],
            eotf: [0.0; LUT_SIZE + 1],
        };
        for i in 0..LUT_SIZE {
            let v = i as f64 / LUT_SIZE as f64;
            t.oetf[i] = srgb::oetf(v);
            t.eotf[i] = srgb::eotf(v);
        }
        t.oetf[LUT_SIZE] = t.oetf[LUT_SIZE - 1];
        t.eotf[LUT_SIZE] = t.eotf[LUT_SIZE - 1];
        t
    })
}

/// Selects between the interpolation tables and the exact formulas for
/// the whole process.
///
/// The table path is the default. The setting applies to every
/// subsequent [`eotf`]/[`oetf`] call on every thread.
pub fn set_lut_enabled(enabled: bool) {
    USE_LUT.store(enabled, Ordering::Relaxed);
}

/// Returns true if the interpolation tables are in use.
pub fn lut_enabled() -> bool {
    USE_LUT.load(Ordering::Relaxed)
}

#[inline]
fn interpolate(table: &[f64; LUT_SIZE + 1], v: f64) -> f64 {
    let i = v * LUT_SIZE as f64;
    // The mask guards the index against floating-point overshoot at the
    // upper boundary; the duplicated last entry guards `lo + 1`.
    let lo = (i as usize) & (LUT_SIZE - 1);
    let frac = i - lo as f64;
    table[lo] * (1.0 - frac) + table[lo + 1] * frac
}

/// sRGB EOTF: decodes an sRGB encoded value to linear light.
///
/// Input is clamped to [0, 1]. Dispatches to the interpolation table or
/// to [`srgb::eotf`] depending on the process-wide mode.
///
/// # Example
///
/// ```rust
/// use tone_transfer::{eotf, srgb};
///
/// assert!((eotf(0.5) - srgb::eotf(0.5)).abs() < 3e-3);
/// assert_eq!(eotf(-2.0), 0.0);
/// assert_eq!(eotf(2.0), 1.0);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if !lut_enabled() {
        return srgb::eotf(v);
    }
    if v <= 0.0 {
        return 0.0;
    }
    if v >= 1.0 {
        return 1.0;
    }
    interpolate(&tables().eotf, v)
}

/// sRGB OETF: encodes a linear light value to sRGB.
///
/// Input is clamped to [0, 1]. Dispatches to the interpolation table or
/// to [`srgb::oetf`] depending on the process-wide mode.
#[inline]
pub fn oetf(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if !lut_enabled() {
        return srgb::oetf(v);
    }
    if v <= 0.0 {
        return 0.0;
    }
    if v >= 1.0 {
        return 1.0;
    }
    interpolate(&tables().oetf, v)
}
