//! Per-frame halftone pipeline.
//!
//! Stage order
//! - Tonal adjustment: RGBA → adjusted grayscale, in a buffer owned by the call.
//! - Smoothing (sigma > 0): Gaussian convolution into a fresh buffer.
//! - Dithering: in place on the owned buffer.
//! - Rendering: reads the processed buffer, paints a separate white surface.
//!
//! The caller's source buffer is never modified. Parameters are copied at
//! entry and validated before any pixel work, so a rejected frame produces no
//! partial output.
use crate::convolve::convolve;
use crate::diagnostics::{elapsed_ms, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::dither::apply_dither_with_rng;
use crate::error::Result;
use crate::halftone::{Dot, HalftoneRenderer};
use crate::image::{ImageView, PixelBuffer};
use crate::kernel::Kernel;
use crate::params::ParameterSet;
use crate::tone::adjust_tone;
use log::{debug, warn};
use rand::Rng;
use std::time::Instant;

/// Rendered halftone for one input frame.
#[derive(Clone, Debug)]
pub struct HalftoneFrame {
    /// Opaque RGBA surface, same size as the input.
    pub surface: PixelBuffer,
    pub dots: Vec<Dot>,
    pub trace: PipelineTrace,
}

/// Grayscale, smoothed and dithered buffer, ready for the renderer.
#[derive(Clone, Debug)]
pub struct PreparedFrame {
    pub buffer: PixelBuffer,
    pub kernel_size: Option<usize>,
}

/// Process one frame with the thread-local random source.
pub fn process_frame(source: &PixelBuffer, params: &ParameterSet) -> Result<HalftoneFrame> {
    let mut rng = rand::rng();
    process_frame_with_rng(source, params, &mut rng)
}

/// Process one frame, drawing noise-dither jitter from `rng`.
///
/// Deterministic for every dither mode when `rng` is seeded.
pub fn process_frame_with_rng<R: Rng>(
    source: &PixelBuffer,
    params: &ParameterSet,
    rng: &mut R,
) -> Result<HalftoneFrame> {
    let params = *params;
    let total_start = Instant::now();
    params.validate()?;
    let renderer = HalftoneRenderer::new(params.grid_size)?;

    let mut timings = TimingBreakdown::default();
    let prepared = prepare_with_timings(source, &params, rng, &mut timings)?;
    let processed_mean = prepared.buffer.mean_luma();

    let render_start = Instant::now();
    let rendered = renderer.render(&prepared.buffer);
    timings.record_since("render", render_start);
    timings.total_ms = elapsed_ms(total_start);

    let trace = PipelineTrace {
        input: InputDescriptor::new(source.width(), source.height(), renderer.grid_size()),
        params,
        timings,
        kernel_size: prepared.kernel_size,
        dither_mode: params.dither_mode,
        processed_mean,
        dot_count: rendered.dots.len(),
    };
    debug!("process_frame {}", trace.summary());

    Ok(HalftoneFrame {
        surface: rendered.surface,
        dots: rendered.dots,
        trace,
    })
}

/// Run every stage except rendering: tone, optional smoothing and dithering.
pub fn prepare_frame<R: Rng>(
    source: &PixelBuffer,
    params: &ParameterSet,
    rng: &mut R,
) -> Result<PreparedFrame> {
    let params = *params;
    params.validate()?;
    let mut timings = TimingBreakdown::default();
    prepare_with_timings(source, &params, rng, &mut timings)
}

fn prepare_with_timings<R: Rng>(
    source: &PixelBuffer,
    params: &ParameterSet,
    rng: &mut R,
    timings: &mut TimingBreakdown,
) -> Result<PreparedFrame> {
    let tone = params.tone()?;
    let mut buffer = source.clone();
    if buffer.is_empty() {
        return Ok(PreparedFrame {
            buffer,
            kernel_size: None,
        });
    }

    let start = Instant::now();
    adjust_tone(&mut buffer, &tone);
    timings.record_since("tone", start);

    let mut kernel_size = None;
    if params.smoothing_sigma > 0.0 {
        let start = Instant::now();
        let kernel = Kernel::gaussian(params.smoothing_sigma)?;
        kernel_size = Some(kernel.size());
        buffer = convolve(&buffer, &kernel);
        timings.record_since("smooth", start);
    }

    let start = Instant::now();
    apply_dither_with_rng(&mut buffer, params.dither_mode, rng);
    timings.record_since("dither", start);

    Ok(PreparedFrame {
        buffer,
        kernel_size,
    })
}

/// Keeps the current parameters and the last successfully rendered frame.
///
/// A frame that fails validation leaves the previous output in place, so a
/// display driven from [`FrameProcessor::last_frame`] never shows a partial
/// result.
#[derive(Debug, Default)]
pub struct FrameProcessor {
    params: ParameterSet,
    last: Option<HalftoneFrame>,
    rejected: usize,
}

impl FrameProcessor {
    pub fn new(params: ParameterSet) -> Self {
        Self {
            params,
            last: None,
            rejected: 0,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Replace the parameters used for subsequent frames.
    pub fn set_params(&mut self, params: ParameterSet) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    pub fn last_frame(&self) -> Option<&HalftoneFrame> {
        self.last.as_ref()
    }

    /// Number of frames rejected since construction.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn process(&mut self, source: &PixelBuffer) -> Result<&HalftoneFrame> {
        let mut rng = rand::rng();
        self.process_with_rng(source, &mut rng)
    }

    pub fn process_with_rng<R: Rng>(
        &mut self,
        source: &PixelBuffer,
        rng: &mut R,
    ) -> Result<&HalftoneFrame> {
        match process_frame_with_rng(source, &self.params, rng) {
            Ok(frame) => {
                let frame = self.last.insert(frame);
                Ok(&*frame)
            }
            Err(err) => {
                self.rejected += 1;
                warn!("frame rejected, keeping previous output: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalftoneError;
    use crate::params::DitherMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn source_buffer_is_not_modified() {
        let source = PixelBuffer::filled(12, 12, [10, 200, 30, 255]);
        let params = ParameterSet::default()
            .with_grid_size(4)
            .with_smoothing(1.0)
            .with_dither(DitherMode::FloydSteinberg);
        let frame = process_frame(&source, &params).unwrap();
        assert_eq!(source.pixel(5, 5), [10, 200, 30, 255]);
        assert_eq!(frame.surface.width(), 12);
        assert_eq!(frame.trace.kernel_size, Some(7));
        assert!(frame.trace.timings.stage_ms("smooth").is_some());
    }

    #[test]
    fn zero_sigma_skips_smoothing() {
        let source = PixelBuffer::gray(6, 6, 90);
        let mut rng = StdRng::seed_from_u64(1);
        let prepared = prepare_frame(&source, &ParameterSet::default(), &mut rng).unwrap();
        assert_eq!(prepared.kernel_size, None);
        assert_eq!(prepared.buffer, source);
    }

    #[test]
    fn seeded_noise_is_reproducible_end_to_end() {
        let source = PixelBuffer::gray(24, 24, 128);
        let params = ParameterSet::default()
            .with_grid_size(3)
            .with_dither(DitherMode::Noise);
        let a = process_frame_with_rng(&source, &params, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = process_frame_with_rng(&source, &params, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.surface, b.surface);
        assert_eq!(a.dots, b.dots);
    }

    #[test]
    fn processor_keeps_last_frame_on_rejection() {
        let source = PixelBuffer::gray(8, 8, 0);
        let mut processor = FrameProcessor::new(ParameterSet::default().with_grid_size(4));
        let dots = processor.process(&source).unwrap().dots.len();
        assert_eq!(dots, 4);

        processor.params_mut().gamma = 0.0;
        let err = processor.process(&source).unwrap_err();
        assert_eq!(err, HalftoneError::InvalidGamma(0.0));
        assert_eq!(processor.rejected(), 1);
        let kept = processor.last_frame().expect("previous frame retained");
        assert_eq!(kept.dots.len(), 4);
        assert_eq!(kept.trace.params.gamma, 1.0);
    }
}
