//! Owned RGBA8 pixel buffer in row-major layout.
//!
//! Every pipeline stage consumes and produces this shape: `width × height`
//! pixels with four interleaved samples (R, G, B, A). Grayscale stages keep
//! `R == G == B` and never touch alpha.
use super::traits::{ImageView, ImageViewMut};
use crate::error::HalftoneError;

/// Samples per pixel.
pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, rejecting a length other than `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, HalftoneError> {
        let size_error = |expected| HalftoneError::BufferSize {
            width,
            height,
            expected,
            actual: data.len(),
        };
        let expected = byte_len(width, height).ok_or_else(|| size_error(usize::MAX))?;
        if data.len() != expected {
            return Err(size_error(expected));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer filled with one RGBA color, or `BufferSize` when
    /// `width * height * 4` does not fit in `usize`.
    pub fn try_filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, HalftoneError> {
        let len = byte_len(width, height).ok_or(HalftoneError::BufferSize {
            width,
            height,
            expected: usize::MAX,
            actual: 0,
        })?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer filled with one RGBA color.
    ///
    /// # Panics
    ///
    /// If `width * height * 4` overflows `usize`; use [`Self::try_filled`]
    /// for untrusted dimensions.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        match Self::try_filled(width, height, rgba) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{err}"),
        }
    }

    /// Opaque gray buffer (`R = G = B = value`, `A = 255`).
    pub fn gray(width: usize, height: usize, value: u8) -> Self {
        Self::filled(width, height, [value, value, value, 255])
    }

    /// Opaque white surface, the renderer's background.
    pub fn white(width: usize, height: usize) -> Self {
        Self::gray(width, height, 255)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Red sample at (x, y); the gray level once the buffer is grayscale.
    #[inline]
    pub fn luma_at(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = self.idx(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Write `value` into R, G and B of (x, y), leaving alpha alone.
    #[inline]
    pub fn set_gray(&mut self, x: usize, y: usize, value: u8) {
        let i = self.idx(x, y);
        set_gray(&mut self.data[i..i + CHANNELS], value);
    }

    /// Iterate pixels as `[R, G, B, A]` chunks.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// True when every pixel has `R == G == B`.
    pub fn is_grayscale(&self) -> bool {
        self.pixels().all(|px| px[0] == px[1] && px[1] == px[2])
    }

    /// Mean of the red channel, 0 for an empty buffer.
    pub fn mean_luma(&self) -> f32 {
        let count = self.width * self.height;
        if count == 0 {
            return 0.0;
        }
        let sum: u64 = self.pixels().map(|px| px[0] as u64).sum();
        sum as f32 / count as f32
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// `width * height * 4`, or `None` on overflow.
#[inline]
fn byte_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(CHANNELS)
}

/// Store one gray level into the color channels of a single RGBA pixel.
#[inline]
pub(crate) fn set_gray(px: &mut [u8], value: u8) {
    px[0] = value;
    px[1] = value;
    px[2] = value;
}

impl ImageView for PixelBuffer {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn channels(&self) -> usize {
        CHANNELS
    }
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
