//! CDN path rewriting.
//!
//! Maps a relative output path to an absolute URL using a default base and
//! optional per-extension overrides. Only active in production; remote links
//! always pass through untouched.

use std::collections::BTreeMap;

use crate::config::AssetConfig;
use crate::core::reference::{extension_of, is_remote_link};

/// Rewrites built asset paths through the configured CDN policy.
#[derive(Debug, Clone)]
pub struct CdnPathRewriter {
    default_url: String,
    filetypes: BTreeMap<String, String>,
    production: bool,
}

impl CdnPathRewriter {
    pub fn new(config: &AssetConfig, production: bool) -> Self {
        CdnPathRewriter {
            default_url: config.cdn_url.clone(),
            filetypes: config.cdn_filetypes.clone(),
            production,
        }
    }

    /// Rewrite a public-relative path to its CDN URL.
    ///
    /// Passes through unchanged for remote links, outside production, or
    /// when no base URL applies to the path's extension.
    pub fn rewrite(&self, path: &str) -> String {
        if !self.production || is_remote_link(path) {
            return path.to_string();
        }

        let base = extension_of(path)
            .and_then(|ext| self.filetypes.get(&ext))
            .map(String::as_str)
            .unwrap_or(&self.default_url);

        if base.is_empty() {
            return path.to_string();
        }

        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AssetConfig {
        let mut config = AssetConfig {
            cdn_url: "//cdn.example.com".to_string(),
            ..AssetConfig::default()
        };
        config
            .cdn_filetypes
            .insert("png".to_string(), "//media.example.com/".to_string());
        config
    }

    #[test]
    fn test_rewrite_uses_default_base() {
        let rewriter = CdnPathRewriter::new(&config(), true);
        assert_eq!(
            rewriter.rewrite("assets/stylesheets/app.css"),
            "//cdn.example.com/assets/stylesheets/app.css"
        );
    }

    #[test]
    fn test_rewrite_per_extension_override() {
        let rewriter = CdnPathRewriter::new(&config(), true);
        assert_eq!(
            rewriter.rewrite("/assets/images/logo.png"),
            "//media.example.com/assets/images/logo.png"
        );
    }

    #[test]
    fn test_rewrite_passthrough_outside_production() {
        let rewriter = CdnPathRewriter::new(&config(), false);
        assert_eq!(
            rewriter.rewrite("assets/stylesheets/app.css"),
            "assets/stylesheets/app.css"
        );
    }

    #[test]
    fn test_rewrite_passthrough_for_remote_links() {
        let rewriter = CdnPathRewriter::new(&config(), true);
        assert_eq!(
            rewriter.rewrite("https://other.example.com/x.css"),
            "https://other.example.com/x.css"
        );
    }

    #[test]
    fn test_rewrite_passthrough_with_no_base() {
        let rewriter = CdnPathRewriter::new(&AssetConfig::default(), true);
        assert_eq!(rewriter.rewrite("assets/app.css"), "assets/app.css");
    }
}
