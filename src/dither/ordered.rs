use crate::image::rgba::set_gray;
use crate::image::{ImageViewMut, PixelBuffer};

/// 8×8 Bayer index matrix (values 0–63).
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 48, 12, 60, 3, 51, 15, 63],
    [32, 16, 44, 28, 35, 19, 47, 31],
    [8, 56, 4, 52, 11, 59, 7, 55],
    [40, 24, 36, 20, 43, 27, 39, 23],
    [2, 50, 14, 62, 1, 49, 13, 61],
    [34, 18, 46, 30, 33, 17, 45, 29],
    [10, 58, 6, 54, 9, 57, 5, 53],
    [42, 26, 38, 22, 41, 25, 37, 21],
];

const SCALE: f32 = 255.0 / 64.0;

/// Threshold at (x, y): the tiled Bayer entry scaled into [0, 255).
#[inline]
pub fn bayer_threshold(x: usize, y: usize) -> f32 {
    BAYER_8X8[y % 8][x % 8] as f32 * SCALE
}

/// Ordered dithering against the tiled 8×8 Bayer matrix.
pub fn ordered_dither(buffer: &mut PixelBuffer) {
    for (y, row) in buffer.rows_mut().enumerate() {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let t = bayer_threshold(x, y);
            let v = if (px[0] as f32) < t { 0 } else { 255 };
            set_gray(px, v);
        }
    }
}
