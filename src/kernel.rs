//! Square convolution kernels and the Gaussian kernel builder.
//!
//! A Gaussian kernel for `sigma` has side `2 * ceil(2.5 * sigma) + 1`, which is
//! always odd so the centre cell is well defined. Weights are normalised to
//! sum to 1 so smoothing never shifts overall brightness.
//!
//! Sides above [`MAX_KERNEL_SIZE`] (sigma above roughly 200 px) are rejected.
use crate::error::{HalftoneError, Result};

/// Largest accepted Gaussian side length.
pub const MAX_KERNEL_SIZE: usize = 1001;

/// Immutable square matrix of weights in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from explicit weights. `size` must be odd and
    /// `weights.len()` must equal `size * size`.
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self> {
        let expected = size * size;
        if size % 2 == 0 || weights.len() != expected {
            return Err(HalftoneError::InvalidKernel {
                size,
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    /// The 1×1 kernel of weight 1; convolving with it is a no-op.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Normalised 2D Gaussian for `sigma >= 0`. `sigma == 0` yields the
    /// identity kernel.
    pub fn gaussian(sigma: f32) -> Result<Self> {
        let size = gaussian_size(sigma).ok_or(HalftoneError::InvalidSmoothing(sigma))?;
        if sigma == 0.0 {
            return Ok(Self::identity());
        }
        let center = (size / 2) as f64;
        let sigma = sigma as f64;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let scale = 1.0 / (std::f64::consts::PI * two_sigma_sq);

        let mut raw = Vec::with_capacity(size * size);
        let mut sum = 0.0f64;
        for y in 0..size {
            let dy = y as f64 - center;
            for x in 0..size {
                let dx = x as f64 - center;
                let v = scale * (-(dx * dx + dy * dy) / two_sigma_sq).exp();
                raw.push(v);
                sum += v;
            }
        }
        let weights = raw.into_iter().map(|v| (v / sum) as f32).collect();
        Ok(Self { size, weights })
    }

    /// Side length (always odd).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre cell to the border.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky * self.size + kx]
    }

    /// Iterate kernel rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.weights.chunks_exact(self.size)
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    pub fn is_identity(&self) -> bool {
        self.size == 1 && self.weights[0] == 1.0
    }
}

/// Side length of the Gaussian kernel for `sigma`.
///
/// `None` when sigma is negative, non-finite, or the side would exceed
/// [`MAX_KERNEL_SIZE`].
pub fn gaussian_size(sigma: f32) -> Option<usize> {
    if !sigma.is_finite() || sigma < 0.0 {
        return None;
    }
    let radius = (sigma as f64 * 2.5).ceil();
    if radius > (MAX_KERNEL_SIZE / 2) as f64 {
        return None;
    }
    (radius as usize)
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .filter(|&size| size <= MAX_KERNEL_SIZE)
}
