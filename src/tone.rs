//! Grayscale conversion with brightness, contrast and gamma.
//!
//! Each pixel goes through
//!
//! ```text
//! gray = 0.299 R + 0.587 G + 0.114 B
//! gray = gray + 255 * brightness
//! gray = (gray - 128) * contrast + 128
//! gray = max(gray, 0)
//! gray = 255 * (gray / 255)^(1 / gamma)      (only when gray > 0)
//! gray = clamp(gray, 0, 255)
//! ```
//!
//! and the result is written to R, G and B. Alpha is left untouched.
use crate::error::{HalftoneError, Result};
use crate::image::{clamp_u8, PixelBuffer};

/// Validated tonal settings. Construct with [`ToneParams::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneParams {
    brightness_offset: f64,
    contrast_factor: f64,
    inv_gamma: f64,
}

impl ToneParams {
    /// `brightness_offset` is a fraction of full scale (roughly [-1, 1]),
    /// `contrast_factor` multiplies the distance from mid-gray, `gamma`
    /// must be positive and finite.
    pub fn new(brightness_offset: f64, contrast_factor: f64, gamma: f32) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(HalftoneError::InvalidGamma(gamma));
        }
        Ok(Self {
            brightness_offset,
            contrast_factor,
            inv_gamma: 1.0 / gamma as f64,
        })
    }

    /// Neutral settings: the adjuster only converts to grayscale.
    pub fn identity() -> Self {
        Self {
            brightness_offset: 0.0,
            contrast_factor: 1.0,
            inv_gamma: 1.0,
        }
    }

    /// Apply brightness, contrast and gamma to a luma value in [0, 255].
    #[inline]
    pub fn map_luma(&self, luma: f64) -> f64 {
        let mut gray = luma + 255.0 * self.brightness_offset;
        gray = (gray - 128.0) * self.contrast_factor + 128.0;
        gray = gray.max(0.0);
        if gray > 0.0 {
            gray = 255.0 * (gray / 255.0).powf(self.inv_gamma);
        }
        gray.clamp(0.0, 255.0)
    }

    /// Unquantized adjusted gray level for one RGB triple.
    #[inline]
    pub fn adjusted_gray(&self, r: u8, g: u8, b: u8) -> f64 {
        self.map_luma(luma(r, g, b))
    }
}

/// Rec. 601 luma.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * 0.299 + g as f64 * 0.587 + b as f64 * 0.114
}

/// Convert `buffer` to adjusted grayscale in place.
pub fn adjust_tone(buffer: &mut PixelBuffer, tone: &ToneParams) {
    for px in buffer.pixels_mut() {
        let v = clamp_u8(tone.adjusted_gray(px[0], px[1], px[2]));
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
}
