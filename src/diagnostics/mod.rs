//! Diagnostics attached to every processed frame.
//!
//! `PipelineTrace` records the input geometry, the parameter snapshot the
//! frame was processed with, per-stage timings and a few summary statistics.
//! Everything serializes to camelCase JSON.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, PipelineTrace};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
