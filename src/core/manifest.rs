//! Durable record of production builds.
//!
//! The manifest maps `{kind}-{identifier}` keys to the content fingerprint
//! of the last successful build. It is loaded once at startup and persisted
//! synchronously on every mutation, so the in-memory entries and the backing
//! file never drift within a process.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::reference::AssetKind;

const MANIFEST_FILE: &str = "collections.json";

/// Collection build manifest.
#[derive(Debug, Default)]
pub struct Manifest {
    dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest backed by `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Manifest {
            dir: dir.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the manifest from its backing file.
    ///
    /// A missing or unparseable file means "no prior builds": the manifest
    /// starts empty rather than failing.
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let mut manifest = Manifest::new(dir);
        let path = manifest.path();

        if let Ok(contents) = std::fs::read_to_string(&path) {
            match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => manifest.entries = entries,
                Err(e) => {
                    tracing::warn!("ignoring unparseable manifest {}: {}", path.display(), e);
                }
            }
        }

        manifest
    }

    /// Path to the backing file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Get the recorded fingerprint for a collection identifier.
    pub fn get(&self, kind: AssetKind, identifier: &str) -> Option<&str> {
        self.entries
            .get(&Self::key(kind, identifier))
            .map(String::as_str)
    }

    /// Record a build fingerprint and persist immediately.
    ///
    /// Returns whether the persist succeeded; a failed persist leaves the
    /// in-memory entry in place so a later `make` can retry the write.
    pub fn make(&mut self, kind: AssetKind, identifier: &str, fingerprint: &str) -> bool {
        self.entries
            .insert(Self::key(kind, identifier), fingerprint.to_string());
        self.save()
    }

    /// Clear all entries and remove the backing file.
    ///
    /// Returns whether a file was actually removed; `false` means there was
    /// nothing to delete, which is not an error.
    pub fn delete(&mut self) -> bool {
        self.entries.clear();

        let path = self.path();
        if path.exists() {
            match std::fs::remove_file(&path) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("failed to remove manifest {}: {}", path.display(), e);
                    false
                }
            }
        } else {
            false
        }
    }

    fn key(kind: AssetKind, identifier: &str) -> String {
        format!("{}-{}", kind.as_str(), identifier)
    }

    fn save(&self) -> bool {
        let path = self.path();

        if let Err(e) = ensure_parent(&path) {
            tracing::warn!("failed to prepare manifest directory: {}", e);
            return false;
        }

        let contents = match serde_json::to_string_pretty(&self.entries) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("failed to serialize manifest: {}", e);
                return false;
            }
        };

        match std::fs::write(&path, contents) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to write manifest {}: {}", path.display(), e);
                false
            }
        }
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
