//! Asset reference classification.
//!
//! A reference is a raw string naming a stylesheet or script source. It is
//! classified by pattern match only, never by filesystem probing:
//!
//! - remote: `http://`, `https://`, or protocol-relative `//`
//! - package-scoped: `vendor/package:relative/path`
//! - local: anything else

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::AssetConfig;

static PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+):(.*)$").expect("package pattern is valid")
});

/// Asset type rendered by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Style,
    Script,
}

impl AssetKind {
    /// Display name, also used as the manifest key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Style => "style",
            AssetKind::Script => "script",
        }
    }

    /// Output extension for built artifacts.
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Style => "css",
            AssetKind::Script => "js",
        }
    }

    /// Publish directory under the public root, from configuration.
    pub fn dir<'a>(&self, config: &'a AssetConfig) -> &'a str {
        match self {
            AssetKind::Style => &config.style_dir,
            AssetKind::Script => &config.script_dir,
        }
    }

    /// Whether an asset with this extension belongs to this kind.
    ///
    /// Style accepts `css` plus any registered source-transform extension;
    /// script accepts `js`. Anything else is silently skipped.
    pub fn accepts(&self, extension: &str, transform_extensions: &[String]) -> bool {
        let extension = extension.to_ascii_lowercase();
        match self {
            AssetKind::Style => {
                extension == "css" || transform_extensions.iter().any(|e| *e == extension)
            }
            AssetKind::Script => extension == "js",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine whether a reference is a remote link.
pub fn is_remote_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://") || link.starts_with("//")
}

/// Split a package-scoped reference into (vendor, package, relative path).
pub fn package_reference(reference: &str) -> Option<(&str, &str, &str)> {
    let caps = PACKAGE_RE.captures(reference)?;
    Some((
        caps.get(1).unwrap().as_str(),
        caps.get(2).unwrap().as_str(),
        caps.get(3).unwrap().as_str(),
    ))
}

/// Build the public link for a local reference.
///
/// Package-scoped references rewrite to
/// `{packages_url}/{vendor}/{package}/{type_dir}/{rest}`; plain local
/// references pass through unchanged.
pub fn to_local_link(reference: &str, type_dir: &str, packages_url: &str) -> String {
    match package_reference(reference) {
        Some((vendor, package, rest)) => format!(
            "{}/{}/{}/{}/{}",
            packages_url.trim_end_matches('/'),
            vendor,
            package,
            type_dir.trim_matches('/'),
            rest
        ),
        None => reference.to_string(),
    }
}

/// Lowercased extension of a reference, if it has one.
pub fn extension_of(reference: &str) -> Option<String> {
    Path::new(reference)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
