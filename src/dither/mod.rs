//! Black/white dithering of a grayscale buffer.
//!
//! Every mode reads the red channel, writes the same 0 or 255 value into R, G
//! and B, and leaves alpha untouched. `DitherMode::None` is the identity.
//!
//! - `error_diffusion`: Floyd–Steinberg, strictly sequential.
//! - `ordered`: tiled 8×8 Bayer thresholds, deterministic.
//! - `noise`: random threshold jitter; the random source is injectable.

mod error_diffusion;
mod noise;
mod ordered;

pub use error_diffusion::floyd_steinberg;
pub use noise::{noise_dither, NOISE_AMPLITUDE};
pub use ordered::{ordered_dither, BAYER_8X8};

use crate::image::PixelBuffer;
use crate::params::DitherMode;
use rand::Rng;

/// Gray levels strictly below this become black.
pub const THRESHOLD: f32 = 128.0;

/// Dither in place using the thread-local random source for `Noise`.
pub fn apply_dither(buffer: &mut PixelBuffer, mode: DitherMode) {
    let mut rng = rand::rng();
    apply_dither_with_rng(buffer, mode, &mut rng);
}

/// Dither in place, drawing `Noise` jitter from `rng`.
pub fn apply_dither_with_rng<R: Rng>(buffer: &mut PixelBuffer, mode: DitherMode, rng: &mut R) {
    match mode {
        DitherMode::None => {}
        DitherMode::FloydSteinberg => floyd_steinberg(buffer),
        DitherMode::Ordered => ordered_dither(buffer),
        DitherMode::Noise => noise_dither(buffer, rng),
    }
}

#[inline]
pub(crate) fn quantize(level: f32) -> u8 {
    if level < THRESHOLD {
        0
    } else {
        255
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ramp(width: usize, height: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::gray(width, height, 0);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y * width) * 255 / (width * height - 1)) as u8;
                buf.set_pixel(x, y, [v, v, v, (x * 10) as u8]);
            }
        }
        buf
    }

    #[test]
    fn none_is_identity() {
        let src = ramp(9, 5);
        let mut out = src.clone();
        apply_dither(&mut out, DitherMode::None);
        assert_eq!(out, src);
    }

    #[test]
    fn every_active_mode_outputs_binary_gray_and_keeps_alpha() {
        let src = ramp(16, 12);
        let mut rng = StdRng::seed_from_u64(7);
        for mode in [DitherMode::FloydSteinberg, DitherMode::Ordered, DitherMode::Noise] {
            let mut out = src.clone();
            apply_dither_with_rng(&mut out, mode, &mut rng);
            for (got, orig) in out.pixels().zip(src.pixels()) {
                assert!(got[0] == 0 || got[0] == 255, "{mode}: value {}", got[0]);
                assert_eq!(got[0], got[1]);
                assert_eq!(got[1], got[2]);
                assert_eq!(got[3], orig[3], "{mode}: alpha changed");
            }
            assert_eq!(out.as_slice().len(), src.as_slice().len());
        }
    }
}
