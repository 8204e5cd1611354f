//! Per-frame processing parameters.
//!
//! `ParameterSet` mirrors the controls of an interactive front end: integer
//! sliders for grid size, brightness and contrast, a float gamma exponent, a
//! smoothing sigma and a dither selector. The pipeline copies it at entry, so
//! callers are free to mutate their own copy between frames.

use crate::error::{HalftoneError, Result};
use crate::kernel::gaussian_size;
use crate::tone::ToneParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dithering applied after tonal adjustment and smoothing.
///
/// Parsing is strict: names outside the four known modes are rejected with
/// [`HalftoneError::UnknownDitherMode`] rather than falling back to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DitherMode {
    #[default]
    None,
    FloydSteinberg,
    Ordered,
    Noise,
}

impl DitherMode {
    pub const ALL: [DitherMode; 4] = [
        DitherMode::None,
        DitherMode::FloydSteinberg,
        DitherMode::Ordered,
        DitherMode::Noise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DitherMode::None => "None",
            DitherMode::FloydSteinberg => "FloydSteinberg",
            DitherMode::Ordered => "Ordered",
            DitherMode::Noise => "Noise",
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherMode {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "none" => Ok(DitherMode::None),
            "floydsteinberg" => Ok(DitherMode::FloydSteinberg),
            "ordered" | "bayer" => Ok(DitherMode::Ordered),
            "noise" => Ok(DitherMode::Noise),
            _ => Err(HalftoneError::UnknownDitherMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for DitherMode {
    type Error = HalftoneError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Tonal and structural settings for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    /// Halftone cell size in pixels (>= 1).
    pub grid_size: i32,
    /// Brightness in slider units; `brightness / 100` of full scale is added.
    pub brightness: i32,
    /// Contrast in slider units; the contrast factor is `1 + contrast / 100`.
    pub contrast: i32,
    /// Gamma exponent (> 0). Values above 1 brighten midtones.
    pub gamma: f32,
    /// Gaussian smoothing sigma in pixels. 0 disables smoothing; sigmas whose
    /// kernel would exceed `kernel::MAX_KERNEL_SIZE` are rejected.
    pub smoothing_sigma: f32,
    pub dither_mode: DitherMode,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            brightness: 0,
            contrast: 0,
            gamma: 1.0,
            smoothing_sigma: 0.0,
            dither_mode: DitherMode::None,
        }
    }
}

impl ParameterSet {
    pub const DEFAULT_GRID_SIZE: i32 = 20;

    /// Restore every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_brightness(mut self, brightness: i32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: i32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_smoothing(mut self, sigma: f32) -> Self {
        self.smoothing_sigma = sigma;
        self
    }

    pub fn with_dither(mut self, mode: DitherMode) -> Self {
        self.dither_mode = mode;
        self
    }

    /// Brightness as a fraction of full scale (slider value / 100).
    pub fn brightness_offset(&self) -> f64 {
        self.brightness as f64 / 100.0
    }

    /// Multiplier applied around mid-gray (1 + slider value / 100).
    pub fn contrast_factor(&self) -> f64 {
        1.0 + self.contrast as f64 / 100.0
    }

    /// Validated tonal parameters for the adjuster.
    pub fn tone(&self) -> Result<ToneParams> {
        ToneParams::new(self.brightness_offset(), self.contrast_factor(), self.gamma)
    }

    /// Check every precondition the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            return Err(HalftoneError::InvalidGridSize(self.grid_size));
        }
        if gaussian_size(self.smoothing_sigma).is_none() {
            return Err(HalftoneError::InvalidSmoothing(self.smoothing_sigma));
        }
        self.tone().map(|_| ())
    }
}
