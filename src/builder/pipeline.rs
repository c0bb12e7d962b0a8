//! The render engine.
//!
//! `Pipeline` wires the collection registry, resolver, renderers, manifest,
//! CDN rewriter and fingerprinter together. All collaborators arrive through
//! the constructor, so tests can stub the network, the minifier, and the
//! preprocessor.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::development::DevelopmentRenderer;
use crate::builder::html;
use crate::builder::production::ProductionBuilder;
use crate::builder::resolver::AssetResolver;
use crate::cdn::CdnPathRewriter;
use crate::config::AssetConfig;
use crate::core::collection::CollectionRegistry;
use crate::core::manifest::Manifest;
use crate::core::reference::{extension_of, is_remote_link, to_local_link, AssetKind};
use crate::error::BallastError;
use crate::fetch::{HttpFetcher, RemoteFetcher};
use crate::fingerprint::Fingerprinter;
use crate::transform::{BasicMinifier, Minifier, PassthroughTransform, SourceTransform};

/// Result of a render request.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Markup for a freshly built (or development-published) request.
    Built(String),

    /// Markup for an existing production artifact that was already current.
    Skipped(String),

    /// The request produced no eligible assets; nothing to do.
    NotRequired,
}

impl RenderOutcome {
    /// The markup, if any was produced.
    pub fn markup(&self) -> Option<&str> {
        match self {
            RenderOutcome::Built(markup) | RenderOutcome::Skipped(markup) => Some(markup),
            RenderOutcome::NotRequired => None,
        }
    }
}

/// The asset pipeline.
pub struct Pipeline {
    config: AssetConfig,
    public_dir: PathBuf,
    registry: CollectionRegistry,
    resolver: AssetResolver,
    manifest: Manifest,
    fetcher: Box<dyn RemoteFetcher>,
    minifier: Box<dyn Minifier>,
    cdn: CdnPathRewriter,
    fingerprinter: Fingerprinter,
    production: bool,
}

impl Pipeline {
    /// Create a pipeline with explicit collaborators.
    ///
    /// Fails when the environment designates production but the public
    /// output root does not exist.
    pub fn new(
        root: impl Into<PathBuf>,
        config: AssetConfig,
        environment: &str,
        fetcher: Box<dyn RemoteFetcher>,
        minifier: Box<dyn Minifier>,
        transforms: Vec<Box<dyn SourceTransform>>,
        manifest: Manifest,
    ) -> Result<Self, BallastError> {
        let root = root.into();
        let public_dir = root.join(&config.public_dir);
        let production = config.is_production_env(environment);

        if production && !public_dir.is_dir() {
            return Err(BallastError::PublicDirMissing { path: public_dir });
        }

        let registry = CollectionRegistry::new(config.collections.clone());
        let resolver = AssetResolver::new(&root, &config.paths, transforms);
        let cdn = CdnPathRewriter::new(&config, production);
        let fingerprinter = Fingerprinter::new(&public_dir, production && config.fingerprint);

        Ok(Pipeline {
            config,
            public_dir,
            registry,
            resolver,
            manifest,
            fetcher,
            minifier,
            cdn,
            fingerprinter,
            production,
        })
    }

    /// Create a pipeline with the stock collaborators: HTTP fetching, the
    /// built-in minifier, and a passthrough `less` transform.
    pub fn with_defaults(
        root: impl Into<PathBuf>,
        config: AssetConfig,
        environment: &str,
    ) -> Result<Self, BallastError> {
        let root = root.into();
        let manifest = Manifest::load(root.join(&config.manifest_dir));
        let fetcher = Box::new(HttpFetcher::new()?);

        Pipeline::new(
            root,
            config,
            environment,
            fetcher,
            Box::new(BasicMinifier),
            vec![Box::new(PassthroughTransform::new("less"))],
            manifest,
        )
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    /// Absolute path of the public output root.
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Render one or more collections as markup.
    ///
    /// `force` routes the request down the production path regardless of
    /// environment and rebuilds even when the target artifact exists.
    pub fn render(
        &mut self,
        collections: &[String],
        kind: AssetKind,
        force: bool,
    ) -> Result<RenderOutcome> {
        let (identifier, links) = self.gather(collections, kind);

        if identifier.is_empty() || links.is_empty() {
            return Ok(RenderOutcome::NotRequired);
        }

        if self.production || force {
            let builder = ProductionBuilder::new(
                &self.resolver,
                self.fetcher.as_ref(),
                self.minifier.as_ref(),
                &self.public_dir,
                self.config.gzip,
            );
            let artifact = builder.build(&identifier, &links, kind, kind.dir(&self.config), force)?;

            let markup = html::tag(kind, &self.cdn.rewrite(&artifact.relative_path));

            if artifact.freshly_built {
                if !self.manifest.make(kind, &identifier, &artifact.fingerprint) {
                    tracing::warn!(
                        "failed to persist build manifest for {}-{}",
                        kind,
                        identifier
                    );
                }
                Ok(RenderOutcome::Built(markup))
            } else {
                Ok(RenderOutcome::Skipped(markup))
            }
        } else {
            let renderer = DevelopmentRenderer::new(&self.public_dir);
            let markup = renderer.render(
                &self.resolver,
                &identifier,
                &links,
                kind,
                kind.dir(&self.config),
            )?;
            Ok(RenderOutcome::Built(markup))
        }
    }

    /// Public URL for a directly-referenced image, fingerprinted and
    /// CDN-rewritten in production.
    pub fn image(&self, path: &str, absolute: bool) -> String {
        let url = format!(
            "{}/{}",
            self.config.image_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let url = self.fingerprinter.fingerprint(&url);
        let url = self.cdn.rewrite(&url);

        if absolute && !is_remote_link(&url) && !url.starts_with('/') {
            format!("/{}", url)
        } else {
            url
        }
    }

    /// Walk the requested collections and produce the build identifier plus
    /// the ordered, deduplicated list of asset links.
    ///
    /// Unknown collection names are skipped and contribute nothing to the
    /// identifier. Order is collection order, then reference order; the
    /// first occurrence of a duplicated link wins.
    fn gather(&self, collections: &[String], kind: AssetKind) -> (String, Vec<String>) {
        let mut identifier = String::new();
        let mut links: Vec<String> = Vec::new();

        for name in collections {
            let Some(refs) = self.registry.get(name) else {
                tracing::debug!("unknown collection `{}`", name);
                continue;
            };

            for raw in refs {
                let Some(ext) = extension_of(raw) else {
                    continue;
                };
                if !kind.accepts(&ext, self.resolver.transform_extensions()) {
                    continue;
                }

                let link = if is_remote_link(raw) {
                    raw.clone()
                } else {
                    to_local_link(raw, kind.dir(&self.config), &self.config.packages_url)
                };

                if !links.contains(&link) {
                    links.push(link);
                }
            }

            identifier.push_str(name);
            identifier.push('-');
        }

        (identifier, links)
    }
}
