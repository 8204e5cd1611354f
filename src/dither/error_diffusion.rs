use super::quantize;
use crate::image::{GrayField, ImageView, PixelBuffer};

const RIGHT: f32 = 7.0 / 16.0;
const DOWN_LEFT: f32 = 3.0 / 16.0;
const DOWN: f32 = 5.0 / 16.0;
const DOWN_RIGHT: f32 = 1.0 / 16.0;

/// Floyd–Steinberg error diffusion.
///
/// Scans rows top to bottom and columns left to right, pushing the
/// quantisation error onto unvisited neighbours with the classic 7/3/5/1
/// sixteenths. Neighbours outside the buffer are skipped without
/// renormalising, so edge pixels shed part of their error.
pub fn floyd_steinberg(buffer: &mut PixelBuffer) {
    let w = buffer.width();
    let h = buffer.height();
    let mut field = GrayField::from_gray_buffer(buffer);

    for y in 0..h {
        let has_below = y + 1 < h;
        for x in 0..w {
            let old = field.get(x, y);
            let new = quantize(old);
            let error = old - new as f32;
            buffer.set_gray(x, y, new);

            if x + 1 < w {
                field.add(x + 1, y, error * RIGHT);
            }
            if has_below {
                if x > 0 {
                    field.add(x - 1, y + 1, error * DOWN_LEFT);
                }
                field.add(x, y + 1, error * DOWN);
                if x + 1 < w {
                    field.add(x + 1, y + 1, error * DOWN_RIGHT);
                }
            }
        }
    }
}
