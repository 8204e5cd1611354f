use crate::params::ParameterSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config for the frame-sequence tool: every image in `inputDir` is processed
/// in name order and written to `outputDir` as numbered PNG frames.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameToolConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub params: ParameterSet,
    /// Stop after this many frames.
    #[serde(default)]
    pub max_frames: Option<usize>,
    #[serde(default = "default_prefix")]
    pub frame_prefix: String,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

fn default_prefix() -> String {
    "halftone".to_string()
}

pub fn load_config(path: &Path) -> Result<FrameToolConfig, String> {
    super::load_json(path)
}
