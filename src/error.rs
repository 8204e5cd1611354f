use thiserror::Error;

/// Precondition failures raised by the pixel pipeline.
///
/// Any of these aborts the current frame before a single pixel is written.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HalftoneError {
    #[error("gamma must be a positive finite number, got {0}")]
    InvalidGamma(f32),
    #[error("grid size must be at least 1 pixel, got {0}")]
    InvalidGridSize(i32),
    #[error("smoothing sigma must be finite and non-negative, got {0}")]
    InvalidSmoothing(f32),
    #[error("kernel of side {size} needs {expected} weights, got {actual} (side must be odd)")]
    InvalidKernel {
        size: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{width}x{height} RGBA buffer needs {expected} bytes, got {actual}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown dither mode `{0}` (expected None, FloydSteinberg, Ordered or Noise)")]
    UnknownDitherMode(String),
}

pub type Result<T> = std::result::Result<T, HalftoneError>;
