//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write bytes to a file, creating parent directories if needed.
pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Find files matching a glob pattern.
pub fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    results.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    results.sort();
    Ok(results)
}

/// Delete all files matching a glob pattern. Returns how many were removed.
pub fn delete_matching(pattern: &str) -> Result<usize> {
    let files = glob_files(pattern)?;
    let mut removed = 0;

    for path in files {
        fs::remove_file(&path)
            .with_context(|| format!("failed to delete file: {}", path.display()))?;
        removed += 1;
    }

    Ok(removed)
}
