//! Configuration file support for Ballast.
//!
//! Configuration lives in `ballast.toml` at the project root. Every field
//! has a documented default, so an empty file (or no file at all) yields a
//! working configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Ballast configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Ordered list of directories searched for local assets,
    /// relative to the project root. First match wins.
    pub paths: Vec<String>,

    /// Directory under `public_dir` where stylesheets are published.
    pub style_dir: String,

    /// Directory under `public_dir` where scripts are published.
    pub script_dir: String,

    /// Public output root (webroot), relative to the project root.
    pub public_dir: PathBuf,

    /// Directory where the build manifest is stored, relative to the
    /// project root.
    pub manifest_dir: PathBuf,

    /// Public URL prefix for image assets.
    pub image_url: String,

    /// Public URL root that package-scoped references resolve under.
    pub packages_url: String,

    /// Environment names that designate production.
    pub production: Vec<String>,

    /// Gzip built collections.
    pub gzip: bool,

    /// Content-fingerprint directly-referenced static files in production.
    pub fingerprint: bool,

    /// Default CDN base URL, prepended to built asset paths in production.
    /// Empty means no CDN.
    pub cdn_url: String,

    /// Per-extension CDN base URL overrides.
    pub cdn_filetypes: BTreeMap<String, String>,

    /// Named collections: ordered lists of asset references.
    pub collections: BTreeMap<String, Vec<String>>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            paths: vec![
                "app/assets/javascripts".to_string(),
                "app/assets/stylesheets".to_string(),
                "public/packages".to_string(),
            ],
            style_dir: "assets/stylesheets".to_string(),
            script_dir: "assets/javascripts".to_string(),
            public_dir: PathBuf::from("public"),
            manifest_dir: PathBuf::from(".ballast"),
            image_url: "/assets/images".to_string(),
            packages_url: "/packages".to_string(),
            production: vec!["production".to_string(), "prod".to_string()],
            gzip: false,
            fingerprint: true,
            cdn_url: String::new(),
            cdn_filetypes: BTreeMap::new(),
            collections: BTreeMap::new(),
        }
    }
}

impl AssetConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Whether the given environment name designates production.
    pub fn is_production_env(&self, environment: &str) -> bool {
        self.production.iter().any(|e| e == environment)
    }
}
