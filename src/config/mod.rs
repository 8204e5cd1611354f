//! JSON configuration for the command-line tools.
//!
//! Each tool takes a single config path. Parameters use the same camelCase
//! keys as [`ParameterSet`](crate::ParameterSet) and fall back to its
//! defaults when omitted.

pub mod frames;
pub mod image;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
