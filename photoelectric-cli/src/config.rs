//! JSON configuration file loading.

use std::fs;
use std::path::Path;

use photoelectric_core::ModelConfig;

use crate::Result;

/// Load a model configuration from a JSON file.
///
/// Missing fields take their defaults. The result is validated and
/// normalized once here so later stages can assume a usable configuration.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ModelConfig> {
    let path = path.as_ref();
    log::info!("loading configuration from {}", path.display());
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Load a model configuration from a JSON string.
pub fn from_json(json: &str) -> Result<ModelConfig> {
    let config: ModelConfig = serde_json::from_str(json)?;
    Ok(config.normalized()?)
}
