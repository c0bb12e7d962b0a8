//! Pluggable content transforms.
//!
//! The pipeline never hard-codes a preprocessor or minifier. Both are trait
//! seams injected at construction, so real compilers can be swapped in and
//! tests can stub them out.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::reference::AssetKind;

/// Compiles a source file in a preprocessor format into final content.
pub trait SourceTransform {
    /// File extension (without dot) this transform handles.
    fn extension(&self) -> &str;

    /// Compile the file at `path` into final output bytes.
    fn compile(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Minifies a concatenated asset buffer.
pub trait Minifier {
    fn minify(&self, buffer: &[u8], kind: AssetKind) -> Result<Vec<u8>>;
}

/// A transform that reads the source file unchanged.
///
/// Stands in for a real preprocessor: registering it for `less` lets those
/// references flow through the pipeline and publish as `.css` without a
/// compile step.
pub struct PassthroughTransform {
    extension: String,
}

impl PassthroughTransform {
    pub fn new(extension: impl Into<String>) -> Self {
        PassthroughTransform {
            extension: extension.into(),
        }
    }
}

impl SourceTransform for PassthroughTransform {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn compile(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("failed to read source: {}", path.display()))
    }
}

/// Conservative built-in minifier.
///
/// Strips CSS comments and collapses whitespace; for scripts it only drops
/// blank lines and trailing whitespace, since safe statement-level JS
/// minification needs a real parser.
pub struct BasicMinifier;

impl Minifier for BasicMinifier {
    fn minify(&self, buffer: &[u8], kind: AssetKind) -> Result<Vec<u8>> {
        let text = String::from_utf8_lossy(buffer);

        let minified = match kind {
            AssetKind::Style => minify_css(&text),
            AssetKind::Script => minify_js(&text),
        };

        Ok(minified.into_bytes())
    }
}

fn minify_css(text: &str) -> String {
    // Strip /* ... */ comments, then collapse whitespace runs.
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_comment = false;

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_comment = false;
            }
            continue;
        }
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            in_comment = true;
            continue;
        }
        out.push(c);
    }

    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = false;
    for c in out.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
                last_was_space = true;
            }
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }

    collapsed.trim().to_string()
}

fn minify_js(text: &str) -> String {
    let mut out: String = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
