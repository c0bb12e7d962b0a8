//! Implementation of `ballast build`.

use anyhow::Result;

use crate::builder::pipeline::{Pipeline, RenderOutcome};
use crate::core::reference::AssetKind;
use crate::ops::tidy::tidy;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Build a single named collection (all configured collections if unset).
    pub collection: Option<String>,

    /// Force production bundling, rebuilding artifacts even when current.
    pub production: bool,
}

/// Outcome for one collection/kind combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// A fresh artifact (or development publication) was written.
    Built,

    /// The production artifact already existed and was left alone.
    Skipped,

    /// The combination produced no eligible assets.
    NotRequired,
}

/// One status line of a build run.
#[derive(Debug)]
pub struct BuildReport {
    pub collection: String,
    pub kind: AssetKind,
    pub status: BuildStatus,
}

/// Build one or all collections for both asset kinds.
///
/// A production run tidies previously built artifacts and the manifest
/// first, so stale fingerprinted files never accumulate.
pub fn build(pipeline: &mut Pipeline, opts: &BuildOptions) -> Result<Vec<BuildReport>> {
    if opts.production {
        let summary = tidy(pipeline)?;
        tracing::info!(
            "tidied {} stylesheets and {} scripts before production build",
            summary.stylesheets,
            summary.scripts
        );
    }

    let names: Vec<String> = match &opts.collection {
        Some(name) => vec![name.clone()],
        None => pipeline.registry().names().map(str::to_string).collect(),
    };

    let mut reports = Vec::new();

    for name in names {
        for kind in [AssetKind::Style, AssetKind::Script] {
            let outcome = pipeline.render(std::slice::from_ref(&name), kind, opts.production)?;

            let status = match outcome {
                RenderOutcome::Built(_) => BuildStatus::Built,
                RenderOutcome::Skipped(_) => BuildStatus::Skipped,
                RenderOutcome::NotRequired => BuildStatus::NotRequired,
            };

            reports.push(BuildReport {
                collection: name.clone(),
                kind,
                status,
            });
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::config::AssetConfig;
    use crate::core::manifest::Manifest;
    use crate::fetch::RemoteFetcher;
    use crate::transform::{BasicMinifier, PassthroughTransform};

    struct StubFetcher;

    impl RemoteFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn pipeline(root: &Path, environment: &str) -> Pipeline {
        let assets = root.join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(assets.join("app.css"), "body{}").unwrap();
        std::fs::write(assets.join("app.js"), "var a;\n").unwrap();
        std::fs::create_dir_all(root.join("public")).unwrap();

        let mut collections = BTreeMap::new();
        collections.insert(
            "app".to_string(),
            vec!["app.css".to_string(), "app.js".to_string()],
        );
        collections.insert("styles-only".to_string(), vec!["app.css".to_string()]);

        let config = AssetConfig {
            paths: vec!["assets".to_string()],
            collections,
            ..AssetConfig::default()
        };

        Pipeline::new(
            root,
            config,
            environment,
            Box::new(StubFetcher),
            Box::new(BasicMinifier),
            vec![Box::new(PassthroughTransform::new("less"))],
            Manifest::new(root.join(".ballast")),
        )
        .unwrap()
    }

    #[test]
    fn test_build_all_reports_per_collection_and_kind() {
        let tmp = TempDir::new().unwrap();
        let mut pipeline = pipeline(tmp.path(), "local");

        let reports = build(&mut pipeline, &BuildOptions::default()).unwrap();

        assert_eq!(reports.len(), 4);

        let status = |collection: &str, kind: AssetKind| {
            reports
                .iter()
                .find(|r| r.collection == collection && r.kind == kind)
                .unwrap()
                .status
        };
        assert_eq!(status("app", AssetKind::Style), BuildStatus::Built);
        assert_eq!(status("app", AssetKind::Script), BuildStatus::Built);
        assert_eq!(status("styles-only", AssetKind::Style), BuildStatus::Built);
        assert_eq!(
            status("styles-only", AssetKind::Script),
            BuildStatus::NotRequired
        );
    }

    #[test]
    fn test_build_single_collection() {
        let tmp = TempDir::new().unwrap();
        let mut pipeline = pipeline(tmp.path(), "local");

        let opts = BuildOptions {
            collection: Some("app".to_string()),
            production: false,
        };
        let reports = build(&mut pipeline, &opts).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.collection == "app"));
    }

    #[test]
    fn test_production_build_writes_fingerprinted_bundles() {
        let tmp = TempDir::new().unwrap();
        let mut pipeline = pipeline(tmp.path(), "local");

        let opts = BuildOptions {
            collection: Some("app".to_string()),
            production: true,
        };
        let reports = build(&mut pipeline, &opts).unwrap();
        assert!(reports.iter().all(|r| r.status == BuildStatus::Built));

        let styles = tmp.path().join("public/assets/stylesheets");
        let names: Vec<String> = std::fs::read_dir(styles)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("app-"));
        assert!(names[0].ends_with(".css"));

        assert!(pipeline.manifest().path().exists());
    }
}
