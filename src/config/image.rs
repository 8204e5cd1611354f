use crate::params::ParameterSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config for the single-image tool.
///
/// ```json
/// {
///   "input": "photo.jpg",
///   "params": { "gridSize": 12, "contrast": 20, "ditherMode": "Ordered" },
///   "output": { "image": "out/halftone_image.png", "reportJson": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: ParameterSet,
    pub output: ImageOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ImageToolConfig, String> {
    super::load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DitherMode;

    #[test]
    fn parses_minimal_and_full_configs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");

        std::fs::write(&path, r#"{"input": "a.png", "output": {"image": "b.png"}}"#).unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.params, ParameterSet::default());
        assert!(cfg.output.report_json.is_none());

        std::fs::write(
            &path,
            r#"{"input": "a.png",
                "params": {"gridSize": 6, "gamma": 1.8, "ditherMode": "floyd-steinberg"},
                "output": {"image": "b.png", "reportJson": "r.json"}}"#,
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.params.grid_size, 6);
        assert_eq!(cfg.params.dither_mode, DitherMode::FloydSteinberg);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn unknown_dither_mode_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(
            &path,
            r#"{"input": "a.png", "params": {"ditherMode": "Stucki"}, "output": {"image": "b.png"}}"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("unknown dither mode"), "err={err}");
    }
}
