//! Space-tagged color triples.
//!
//! One concrete type per color space. The types are structurally
//! identical; the point is that they are *not* interchangeable, so the
//! compiler tracks which space a value is in instead of naming
//! discipline.

/// An sRGB-encoded color, channels nominally in [0, 1].
///
/// This is the representation stored in ordinary 8-bit image files:
/// gamma-encoded, perceptually spaced. Tone arithmetic does not happen
/// here - decode to [`LinearRgb`] first.
///
/// # Example
///
/// ```rust
/// use tone_core::EncodedRgb;
///
/// let c = EncodedRgb::from_srgb8(128, 128, 128);
/// assert!((c.r - 0.50196).abs() < 1e-5);
/// assert_eq!(c.to_srgb8(), [128, 128, 128]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodedRgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl EncodedRgb {
    /// Creates a new encoded color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray value with all channels equal.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from 8-bit sRGB channel values.
    ///
    /// Channels are normalized as `v / 255`.
    #[inline]
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Quantizes to 8-bit sRGB channel values.
    ///
    /// Channels are clamped to [0, 1] and rounded as `round(v * 255)`.
    #[inline]
    pub fn to_srgb8(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Clamps every channel to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Returns the channels as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// A linear-light color, channels nominally in [0, 1].
///
/// Values are proportional to physical light intensity. This is the
/// space brightness, contrast, and the chroma shifts are defined in.
/// Intermediate results may leave [0, 1] transiently; the pipeline
/// clamps at its boundaries, not here.
///
/// # Example
///
/// ```rust
/// use tone_core::LinearRgb;
///
/// let c = LinearRgb::new(0.2, 0.4, 0.8);
/// let doubled = c.map(|v| v * 2.0);
/// assert_eq!(doubled.b, 1.6);
/// assert_eq!(doubled.clamp01().b, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl LinearRgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new linear color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray value with all channels equal.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Applies `f` to each channel independently.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Clamps every channel to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|v| v.clamp(0.0, 1.0))
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Returns the channels as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// A BT.709 luma/chroma color.
///
/// Used only as an intermediate space for temperature and tint shifts.
/// `u` and `v` are signed chroma offsets around zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yuv {
    /// Luma.
    pub y: f64,
    /// Blue-difference chroma.
    pub u: f64,
    /// Red-difference chroma.
    pub v: f64,
}

impl Yuv {
    /// Creates a new luma/chroma value.
    #[inline]
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }
}

/// A hue/saturation/value color.
///
/// Used only as an intermediate space for the saturation operator.
/// Hue is normalized to [0, 1). Saturation may exceed 1 transiently
/// when scaled up; `hsv_to_rgb` does not reject that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue, normalized to [0, 1).
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (largest RGB channel).
    pub v: f64,
}

impl Hsv {
    /// Creates a new hue/saturation/value color.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}
