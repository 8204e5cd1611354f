//! Square-kernel convolution over a grayscale RGBA buffer.
//!
//! - Reads the red channel of an immutable source and writes a fresh buffer,
//!   so the neighbourhood of a pixel never contains already-filtered values.
//! - Border samples clamp to the nearest edge pixel (replicate border).
//! - Alpha is copied from the source.
//!
//! Output rows are independent and are computed in parallel with rayon.
//!
//! Complexity: O(W·H·K²) for a K×K kernel.
use crate::image::{clamp_u8, rgba::set_gray, ImageView, ImageViewMut, PixelBuffer};
use crate::kernel::Kernel;
use rayon::prelude::*;

/// Convolve `src` with `kernel`, returning a new buffer of the same shape.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let mut dst = src.clone();
    if src.is_empty() || kernel.is_identity() {
        return dst;
    }

    let w = src.width();
    let h = src.height();
    let radius = kernel.radius();
    // Clamped source column for every (x, kx) pair, shared by all rows.
    let col_taps: Vec<usize> = (0..w)
        .flat_map(|x| (0..kernel.size()).map(move |kx| clamp_index(x + kx, radius, w)))
        .collect();
    let row_len = dst.row_len();

    dst.as_mut_slice()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let src_rows: Vec<&[u8]> = (0..kernel.size())
                .map(|ky| src.row(clamp_index(y + ky, radius, h)))
                .collect();
            for (x, px) in out_row.chunks_exact_mut(4).enumerate() {
                let taps = &col_taps[x * kernel.size()..(x + 1) * kernel.size()];
                let mut acc = 0.0f32;
                for (src_row, k_row) in src_rows.iter().zip(kernel.rows()) {
                    for (&sx, &weight) in taps.iter().zip(k_row) {
                        acc += src_row[sx * 4] as f32 * weight;
                    }
                }
                set_gray(px, clamp_u8(acc as f64));
            }
        });
    dst
}

/// Map `pos - radius` into `[0, len)`, replicating the border.
#[inline]
fn clamp_index(pos: usize, radius: usize, len: usize) -> usize {
    pos.saturating_sub(radius).min(len - 1)
}
