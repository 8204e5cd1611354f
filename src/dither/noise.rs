use super::quantize;
use crate::image::rgba::set_gray;
use crate::image::PixelBuffer;
use rand::Rng;

/// Peak-to-peak jitter added before thresholding: noise is drawn from
/// `[-NOISE_AMPLITUDE / 2, NOISE_AMPLITUDE / 2)`.
pub const NOISE_AMPLITUDE: f32 = 64.0;

/// Threshold each pixel after adding independent uniform noise.
///
/// No error is carried between pixels. Output depends entirely on `rng`;
/// pass a seeded generator for reproducible results.
pub fn noise_dither<R: Rng>(buffer: &mut PixelBuffer, rng: &mut R) {
    for px in buffer.pixels_mut() {
        let noise = (rng.random::<f32>() - 0.5) * NOISE_AMPLITUDE;
        set_gray(px, quantize(px[0] as f32 + noise));
    }
}
