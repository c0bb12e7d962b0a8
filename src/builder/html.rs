//! Markup emission: one tag per asset.

use crate::core::reference::{is_remote_link, AssetKind};

/// Build the HTML tag for an asset at `href`.
///
/// Local paths are rooted with a leading slash; remote links are used as-is.
pub fn tag(kind: AssetKind, href: &str) -> String {
    let href = if is_remote_link(href) || href.starts_with('/') {
        href.to_string()
    } else {
        format!("/{}", href)
    };

    match kind {
        AssetKind::Style => format!("<link rel=\"stylesheet\" href=\"{}\">\n", href),
        AssetKind::Script => format!("<script src=\"{}\"></script>\n", href),
    }
}

/// Inline diagnostic for an asset that could not be found.
pub fn missing_comment(reference: &str) -> String {
    format!("<!-- ballast: '{}' not found -->\n", reference)
}
