//! Development rendering: each asset published individually.
//!
//! Output filenames are scoped by a short hash of the collection identifier
//! so different render requests cannot collide. One bad asset never blocks
//! the rest of the collection; it degrades to an inline diagnostic comment.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::html;
use crate::builder::resolver::AssetResolver;
use crate::core::reference::{is_remote_link, AssetKind};
use crate::util::fs::write_bytes;
use crate::util::hash::short_hash;

pub struct DevelopmentRenderer {
    public_dir: PathBuf,
}

impl DevelopmentRenderer {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        DevelopmentRenderer {
            public_dir: public_dir.into(),
        }
    }

    /// Publish each asset and return the concatenated markup, one tag per
    /// asset, preserving input order.
    pub fn render(
        &self,
        resolver: &AssetResolver,
        identifier: &str,
        links: &[String],
        kind: AssetKind,
        type_dir: &str,
    ) -> Result<String> {
        let scope = short_hash(identifier);
        let mut output = String::new();

        for link in links {
            if is_remote_link(link) {
                output.push_str(&html::tag(kind, link));
                continue;
            }

            let Some(asset) = resolver.resolve(link) else {
                output.push_str(&html::missing_comment(link));
                continue;
            };

            // A preprocessor source publishes under the output extension
            // (theme.less becomes theme-<scope>.css).
            let stem = Path::new(&asset.base_name)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| asset.base_name.clone());
            let file = format!("{}-{}.{}", stem, scope, kind.extension());

            let relative = format!("{}/{}", type_dir.trim_matches('/'), file);
            let absolute = self.public_dir.join(type_dir.trim_matches('/')).join(&file);

            write_bytes(&absolute, &asset.content)?;

            output.push_str(&html::tag(kind, &relative));
        }

        Ok(output)
    }
}
