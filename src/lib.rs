#![doc = include_str!("../README.md")]

// Pipeline stages
pub mod convolve;
pub mod dither;
pub mod halftone;
pub mod kernel;
pub mod tone;

// Frame-level orchestration and data types
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod pipeline;
pub mod playback;

// Tool configuration (used by the binaries)
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{HalftoneError, Result};
pub use crate::halftone::{Dot, HalftoneRenderer, RenderedSurface};
pub use crate::image::PixelBuffer;
pub use crate::kernel::Kernel;
pub use crate::params::{DitherMode, ParameterSet};
pub use crate::pipeline::{
    prepare_frame, process_frame, process_frame_with_rng, FrameProcessor, HalftoneFrame,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use halftone::prelude::*;
///
/// let source = PixelBuffer::filled(64, 48, [90, 140, 200, 255]);
/// let params = ParameterSet::default()
///     .with_grid_size(8)
///     .with_dither(DitherMode::Ordered);
/// let frame = process_frame(&source, &params).unwrap();
/// assert_eq!(frame.surface.width(), 64);
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, ImageViewMut, PixelBuffer};
    pub use crate::{process_frame, DitherMode, FrameProcessor, HalftoneFrame, ParameterSet};
}
