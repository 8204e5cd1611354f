//! Halftone dot rendering.
//!
//! The processed buffer is sampled once per grid cell, at the pixel nearest
//! the cell centre. Darker samples produce larger dots:
//! `radius = (grid / 2) * (1 - sample / 255)`. Dots smaller than
//! [`MIN_VISIBLE_RADIUS`] are skipped.
//!
//! The surface is a separate opaque RGBA buffer that starts white; dots are
//! painted black with one pixel of coverage-based antialiasing at the rim.
use crate::error::{HalftoneError, Result};
use crate::image::{clamp_u8, ImageView, PixelBuffer};
use serde::Serialize;

/// Dots at or below this radius (pixels) are not drawn.
pub const MIN_VISIBLE_RADIUS: f32 = 0.1;

/// One filled circle drawn on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dot {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

/// Output of the renderer: the painted surface plus the dots it contains.
#[derive(Clone, Debug)]
pub struct RenderedSurface {
    pub surface: PixelBuffer,
    pub dots: Vec<Dot>,
}

/// Grid-sampling dot renderer. Construction validates the cell size.
#[derive(Clone, Copy, Debug)]
pub struct HalftoneRenderer {
    grid: usize,
}

impl HalftoneRenderer {
    pub fn new(grid_size: i32) -> Result<Self> {
        if grid_size <= 0 {
            return Err(HalftoneError::InvalidGridSize(grid_size));
        }
        Ok(Self {
            grid: grid_size as usize,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid
    }

    /// Compute the dots for `processed` without painting them.
    pub fn layout(&self, processed: &PixelBuffer) -> Vec<Dot> {
        let w = processed.width();
        let h = processed.height();
        if processed.is_empty() {
            return Vec::new();
        }
        let half = self.grid as f32 / 2.0;
        let sample_offset = self.grid / 2;

        let mut dots = Vec::with_capacity(w.div_ceil(self.grid) * h.div_ceil(self.grid));
        for y in (0..h).step_by(self.grid) {
            let sy = (y + sample_offset).min(h - 1);
            for x in (0..w).step_by(self.grid) {
                let sx = (x + sample_offset).min(w - 1);
                let brightness = processed.luma_at(sx, sy) as f32 / 255.0;
                let radius = half * (1.0 - brightness);
                if radius > MIN_VISIBLE_RADIUS {
                    dots.push(Dot {
                        cx: x as f32 + half,
                        cy: y as f32 + half,
                        radius,
                    });
                }
            }
        }
        dots
    }

    /// Paint the halftone of `processed` onto a fresh white surface of the
    /// same size. `processed` is only read.
    pub fn render(&self, processed: &PixelBuffer) -> RenderedSurface {
        let mut surface = PixelBuffer::white(processed.width(), processed.height());
        let dots = self.layout(processed);
        for dot in &dots {
            fill_disc(&mut surface, dot);
        }
        RenderedSurface { surface, dots }
    }
}

/// Render with a one-off renderer; rejects `grid_size <= 0`.
pub fn render_halftone(processed: &PixelBuffer, grid_size: i32) -> Result<RenderedSurface> {
    Ok(HalftoneRenderer::new(grid_size)?.render(processed))
}

/// Darken the pixels covered by `dot`, blending the one-pixel rim by
/// approximate coverage.
fn fill_disc(surface: &mut PixelBuffer, dot: &Dot) {
    let w = surface.width();
    let h = surface.height();
    if w == 0 || h == 0 {
        return;
    }
    let reach = dot.radius + 0.5;
    let x0 = (dot.cx - reach).floor().max(0.0) as usize;
    let y0 = (dot.cy - reach).floor().max(0.0) as usize;
    let x1 = ((dot.cx + reach).ceil().max(0.0) as usize).min(w - 1);
    let y1 = ((dot.cy + reach).ceil().max(0.0) as usize).min(h - 1);

    for py in y0..=y1 {
        let dy = py as f32 + 0.5 - dot.cy;
        for px in x0..=x1 {
            let dx = px as f32 + 0.5 - dot.cx;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (reach - dist).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let current = surface.luma_at(px, py) as f32;
            let value = clamp_u8((current * (1.0 - coverage)) as f64);
            surface.set_gray(px, py, value);
        }
    }
}
