//! Implementation of `ballast tidy`.

use anyhow::Result;

use crate::builder::pipeline::Pipeline;
use crate::util::fs::delete_matching;

/// What a tidy run removed.
#[derive(Debug, Clone, Copy)]
pub struct TidySummary {
    pub stylesheets: usize,
    pub scripts: usize,
    pub manifest_removed: bool,
}

/// Delete all built stylesheet/script artifacts and the build manifest.
pub fn tidy(pipeline: &mut Pipeline) -> Result<TidySummary> {
    let public = pipeline.public_dir();

    let style_pattern = format!(
        "{}/{}/*.css",
        public.display(),
        pipeline.config().style_dir.trim_matches('/')
    );
    let script_pattern = format!(
        "{}/{}/*.js",
        public.display(),
        pipeline.config().script_dir.trim_matches('/')
    );

    let stylesheets = delete_matching(&style_pattern)?;
    let scripts = delete_matching(&script_pattern)?;
    let manifest_removed = pipeline.manifest_mut().delete();

    Ok(TidySummary {
        stylesheets,
        scripts,
        manifest_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use anyhow::Result as AnyResult;
    use tempfile::TempDir;

    use crate::config::AssetConfig;
    use crate::core::manifest::Manifest;
    use crate::core::reference::AssetKind;
    use crate::fetch::RemoteFetcher;
    use crate::transform::BasicMinifier;

    struct StubFetcher;

    impl RemoteFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> AnyResult<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_tidy_removes_artifacts_and_manifest() {
        let tmp = TempDir::new().unwrap();

        let styles = tmp.path().join("public/assets/stylesheets");
        let scripts = tmp.path().join("public/assets/javascripts");
        std::fs::create_dir_all(&styles).unwrap();
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(styles.join("app-abc.css"), "body{}").unwrap();
        std::fs::write(scripts.join("app-abc.js"), "var a;").unwrap();

        let mut manifest = Manifest::new(tmp.path().join(".ballast"));
        manifest.make(AssetKind::Style, "app-", "abc");

        let mut pipeline = Pipeline::new(
            tmp.path(),
            AssetConfig::default(),
            "local",
            Box::new(StubFetcher),
            Box::new(BasicMinifier),
            Vec::new(),
            manifest,
        )
        .unwrap();

        let summary = tidy(&mut pipeline).unwrap();

        assert_eq!(summary.stylesheets, 1);
        assert_eq!(summary.scripts, 1);
        assert!(summary.manifest_removed);
        assert!(!styles.join("app-abc.css").exists());
        assert!(!scripts.join("app-abc.js").exists());

        // Nothing left on a second pass.
        let summary = tidy(&mut pipeline).unwrap();
        assert_eq!(summary.stylesheets, 0);
        assert_eq!(summary.scripts, 0);
        assert!(!summary.manifest_removed);
    }
}
