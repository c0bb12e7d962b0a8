//! Production bundling: concatenate, minify, fingerprint.
//!
//! The artifact name embeds a content hash of the concatenated buffer, so
//! identical inputs always land on the same filename and an existing target
//! means the expensive minify/gzip/write work can be skipped.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::builder::resolver::AssetResolver;
use crate::core::reference::{is_remote_link, AssetKind};
use crate::fetch::RemoteFetcher;
use crate::transform::Minifier;
use crate::util::fs::write_bytes;
use crate::util::hash::sha256_bytes;

/// Result of a production build.
pub struct ProductionArtifact {
    /// Public-relative path of the artifact.
    pub relative_path: String,

    /// Content hash embedded in the filename.
    pub fingerprint: String,

    /// Whether the artifact was written by this call (`false` means the
    /// target already existed and the rebuild was skipped).
    pub freshly_built: bool,
}

pub struct ProductionBuilder<'a> {
    resolver: &'a AssetResolver,
    fetcher: &'a dyn RemoteFetcher,
    minifier: &'a dyn Minifier,
    public_dir: &'a Path,
    gzip: bool,
}

impl<'a> ProductionBuilder<'a> {
    pub fn new(
        resolver: &'a AssetResolver,
        fetcher: &'a dyn RemoteFetcher,
        minifier: &'a dyn Minifier,
        public_dir: &'a Path,
        gzip: bool,
    ) -> Self {
        ProductionBuilder {
            resolver,
            fetcher,
            minifier,
            public_dir,
            gzip,
        }
    }

    /// Build (or reuse) the bundled artifact for a render request.
    pub fn build(
        &self,
        identifier: &str,
        links: &[String],
        kind: AssetKind,
        type_dir: &str,
        force: bool,
    ) -> Result<ProductionArtifact> {
        let buffer = self.concatenate(links);
        let fingerprint = sha256_bytes(&buffer);

        let file = format!("{}{}.{}", identifier, fingerprint, kind.extension());
        let type_dir = type_dir.trim_matches('/');
        let relative_path = format!("{}/{}", type_dir, file);
        let absolute = self.public_dir.join(type_dir).join(&file);

        if absolute.exists() && !force {
            tracing::debug!("{} is up to date, skipping rebuild", relative_path);
            return Ok(ProductionArtifact {
                relative_path,
                fingerprint,
                freshly_built: false,
            });
        }

        let minified = self
            .minifier
            .minify(&buffer, kind)
            .with_context(|| format!("failed to minify {} bundle `{}`", kind, identifier))?;

        let output = if self.gzip {
            gzip_encode(&minified, Compression::best())?
        } else {
            minified
        };

        write_bytes(&absolute, &output)?;

        Ok(ProductionArtifact {
            relative_path,
            fingerprint,
            freshly_built: true,
        })
    }

    /// Concatenate all assets for the request, in order.
    ///
    /// A remote fetch failure or an asset that disappeared since resolution
    /// contributes empty content rather than aborting the build.
    fn concatenate(&self, links: &[String]) -> Vec<u8> {
        let mut buffer = Vec::new();

        for link in links {
            if is_remote_link(link) {
                let url = if let Some(rest) = link.strip_prefix("//") {
                    format!("http://{}", rest)
                } else {
                    link.clone()
                };

                match self.fetcher.fetch(&url) {
                    Ok(bytes) => buffer.extend_from_slice(&bytes),
                    Err(e) => tracing::warn!("skipping remote asset {}: {}", url, e),
                }
            } else {
                match self.resolver.resolve(link) {
                    Some(asset) => buffer.extend_from_slice(&asset.content),
                    None => tracing::warn!("skipping unreadable asset {}", link),
                }
            }
        }

        buffer
    }
}

/// Gzip a buffer at the given compression level.
pub fn gzip_encode(bytes: &[u8], level: Compression) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), level);
    encoder
        .write_all(bytes)
        .context("failed to gzip artifact")?;
    encoder.finish().context("failed to finish gzip stream")
}
