use halftone::PixelBuffer;

/// Opaque buffer filled with a single RGB color.
pub fn solid_rgba(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::filled(width, height, [rgb[0], rgb[1], rgb[2], 255])
}

/// Horizontal black-to-white ramp.
pub fn horizontal_ramp(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 1 && height > 0, "ramp needs at least two columns");
    let mut buf = PixelBuffer::gray(width, height, 0);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            buf.set_gray(x, y, v);
        }
    }
    buf
}

/// High-contrast checkerboard with colored cells.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut buf = PixelBuffer::gray(width, height, 0);
    for y in 0..height {
        for x in 0..width {
            let rgba = if (x / cell + y / cell) % 2 == 0 {
                [20, 30, 40, 255]
            } else {
                [230, 220, 210, 255]
            };
            buf.set_pixel(x, y, rgba);
        }
    }
    buf
}
