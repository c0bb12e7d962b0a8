//! Local asset resolution.
//!
//! Searches the configured base directories in order and loads the first
//! existing file. Files in a registered source-transform format are compiled;
//! everything else is read raw.

use std::path::{Path, PathBuf};

use crate::transform::SourceTransform;

/// A local asset loaded for one render call. Never persisted.
pub struct ResolvedAsset {
    /// Final content bytes (compiled if a transform applied).
    pub content: Vec<u8>,

    /// File name of the source, extension included.
    pub base_name: String,
}

/// Resolves local references against the configured search paths.
pub struct AssetResolver {
    search_paths: Vec<PathBuf>,
    transforms: Vec<Box<dyn SourceTransform>>,
    transform_extensions: Vec<String>,
}

impl AssetResolver {
    /// Create a resolver rooted at the project directory.
    pub fn new(
        root: &Path,
        paths: &[String],
        transforms: Vec<Box<dyn SourceTransform>>,
    ) -> Self {
        let search_paths = paths.iter().map(|p| root.join(p)).collect();
        let transform_extensions = transforms
            .iter()
            .map(|t| t.extension().to_ascii_lowercase())
            .collect();

        AssetResolver {
            search_paths,
            transforms,
            transform_extensions,
        }
    }

    /// Extensions handled by registered source transforms.
    pub fn transform_extensions(&self) -> &[String] {
        &self.transform_extensions
    }

    /// Find and load an asset, searching base directories in order.
    ///
    /// Returns `None` when no base directory contains the file or the file
    /// cannot be loaded; callers degrade gracefully rather than failing the
    /// whole render.
    pub fn resolve(&self, link: &str) -> Option<ResolvedAsset> {
        let relative = link.trim_start_matches('/');

        for base in &self.search_paths {
            let full = base.join(relative);
            if !full.is_file() {
                continue;
            }

            let base_name = full
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| relative.to_string());

            let content = match self.load(&full) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("failed to load asset {}: {}", full.display(), e);
                    return None;
                }
            };

            return Some(ResolvedAsset { content, base_name });
        }

        tracing::debug!("asset not found in any search path: {}", link);
        None
    }

    fn load(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        if let Some(ext) = extension {
            for transform in &self.transforms {
                if transform.extension() == ext {
                    return transform.compile(path);
                }
            }
        }

        std::fs::read(path).map_err(Into::into)
    }
}
