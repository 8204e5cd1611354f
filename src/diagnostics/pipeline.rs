use super::TimingBreakdown;
use crate::params::{DitherMode, ParameterSet};
use serde::Serialize;

/// What one `process_frame` call did, for logging and JSON reports.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub params: ParameterSet,
    pub timings: TimingBreakdown,
    /// Side of the smoothing kernel; absent when smoothing was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_size: Option<usize>,
    pub dither_mode: DitherMode,
    /// Mean gray level of the buffer handed to the renderer.
    pub processed_mean: f32,
    pub dot_count: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub grid_columns: usize,
    pub grid_rows: usize,
}

impl InputDescriptor {
    pub fn new(width: usize, height: usize, grid_size: usize) -> Self {
        let grid = grid_size.max(1);
        Self {
            width,
            height,
            grid_columns: width.div_ceil(grid),
            grid_rows: height.div_ceil(grid),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.grid_columns * self.grid_rows
    }
}

impl PipelineTrace {
    /// One-line summary in the style used by the binaries' logs.
    pub fn summary(&self) -> String {
        format!(
            "{}x{} grid={} dither={} kernel={} dots={}/{} mean={:.1} total_ms={:.3}",
            self.input.width,
            self.input.height,
            self.params.grid_size,
            self.dither_mode,
            self.kernel_size
                .map(|k| k.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.dot_count,
            self.input.cell_count(),
            self.processed_mean,
            self.timings.total_ms
        )
    }
}
