//! CLI command implementations.

pub mod build;
pub mod completions;
pub mod list;
pub mod tidy;

use std::path::Path;

use anyhow::Result;
use ballast::{AssetConfig, Pipeline};

/// Load configuration and construct a pipeline rooted at the config file's
/// directory.
pub fn load_pipeline(config_path: &Path, environment: &str) -> Result<Pipeline> {
    let config = AssetConfig::load_or_default(config_path);
    let root = project_root(config_path);
    Ok(Pipeline::with_defaults(root, config, environment)?)
}

/// The project root is wherever the configuration file lives.
pub fn project_root(config_path: &Path) -> &Path {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
