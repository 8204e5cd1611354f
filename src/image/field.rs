//! Owned single-channel f32 field in row-major layout.
//!
//! Used as scratch space for error diffusion so that fractional error terms
//! are not rounded away between neighbour updates. A field belongs to one
//! pipeline invocation and is dropped when that invocation returns.
use super::rgba::PixelBuffer;
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct GrayField {
    /// Field width in pixels
    pub w: usize,
    /// Field height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl GrayField {
    /// Seed a field from the red channel of a grayscale RGBA buffer.
    pub fn from_gray_buffer(buffer: &PixelBuffer) -> Self {
        let data = buffer.pixels().map(|px| px[0] as f32).collect();
        Self {
            w: buffer.width(),
            h: buffer.height(),
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Accumulate `delta` into (x, y).
    pub fn add(&mut self, x: usize, y: usize, delta: f32) {
        let i = self.idx(x, y);
        self.data[i] += delta;
    }
}

impl ImageView for GrayField {
    type Sample = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl ImageViewMut for GrayField {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_from_red_channel_and_accumulates() {
        let buffer = PixelBuffer::from_raw(2, 1, vec![10, 99, 99, 255, 200, 0, 0, 7]).unwrap();
        let mut field = GrayField::from_gray_buffer(&buffer);
        assert_eq!(field.as_slice(), &[10.0, 200.0]);
        field.add(1, 0, -12.5);
        assert_eq!(field.get(1, 0), 187.5);
        assert_eq!(field.row(0), &[10.0, 187.5]);
    }
}
