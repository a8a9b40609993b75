//! Adjustment parameters.

use serde::{Deserialize, Serialize};

fn neutral() -> f64 {
    0.5
}

/// The five tone adjustment controls.
///
/// Every control lives in [0, 1] with 0.5 as the neutral position.
/// Values outside [0, 1] are accepted and clamped at the pipeline
/// boundary, never rejected.
///
/// The struct serializes to the flat JSON object used by parameter
/// files; fields omitted from the JSON default to neutral.
///
/// # Example
///
/// ```rust
/// use tone_core::Params;
///
/// let params = Params::NEUTRAL
///     .with_brightness(0.65)
///     .with_temperature(0.4);
/// assert_eq!(params.contrast, 0.5);
///
/// let partial: Params = serde_json::from_str(r#"{"tint": 0.7}"#).unwrap();
/// assert_eq!(partial.tint, 0.7);
/// assert_eq!(partial.saturation, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Brightness control, 0.5 = no change.
    #[serde(default = "neutral")]
    pub brightness: f64,
    /// Contrast control, 0.5 = no change.
    #[serde(default = "neutral")]
    pub contrast: f64,
    /// Saturation control, 0.5 = no change.
    #[serde(default = "neutral")]
    pub saturation: f64,
    /// Color temperature control, 0.5 = no change.
    #[serde(default = "neutral")]
    pub temperature: f64,
    /// Tint control, 0.5 = no change.
    #[serde(default = "neutral")]
    pub tint: f64,
}

impl Params {
    /// All controls at the neutral position.
    pub const NEUTRAL: Self = Self {
        brightness: 0.5,
        contrast: 0.5,
        saturation: 0.5,
        temperature: 0.5,
        tint: 0.5,
    };

    /// Sets the brightness control.
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the contrast control.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    /// Sets the saturation control.
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Sets the color temperature control.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the tint control.
    pub fn with_tint(mut self, tint: f64) -> Self {
        self.tint = tint;
        self
    }

    /// Returns the parameters with every control clamped to [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(0.0, 1.0),
            contrast: self.contrast.clamp(0.0, 1.0),
            saturation: self.saturation.clamp(0.0, 1.0),
            temperature: self.temperature.clamp(0.0, 1.0),
            tint: self.tint.clamp(0.0, 1.0),
        }
    }

    /// True if every control is exactly neutral.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
