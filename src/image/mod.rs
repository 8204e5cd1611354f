pub mod field;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::field::GrayField;
pub use self::rgba::PixelBuffer;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};

/// Round a float sample to the nearest byte, saturating at `[0, 255]`.
///
/// Ties round to even and NaN maps to 0, mirroring a clamped byte array.
#[inline]
pub fn clamp_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::clamp_u8;

    #[test]
    fn clamp_u8_saturates_and_rounds_half_to_even() {
        assert_eq!(clamp_u8(-12.0), 0);
        assert_eq!(clamp_u8(300.0), 255);
        assert_eq!(clamp_u8(141.65), 142);
        assert_eq!(clamp_u8(2.5), 2);
        assert_eq!(clamp_u8(3.5), 4);
        assert_eq!(clamp_u8(f64::NAN), 0);
    }
}
