//! Content-hash renaming for directly-referenced static files.
//!
//! Splices `-{hash}` into a filename so identical content always maps to an
//! identical name. Applied only in production with fingerprinting enabled;
//! a file that cannot be found is returned unchanged.

use std::path::PathBuf;

use crate::util::hash::sha256_file;

/// Hex chars of the content hash spliced into fingerprinted names.
const FINGERPRINT_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct Fingerprinter {
    public_dir: PathBuf,
    enabled: bool,
}

impl Fingerprinter {
    pub fn new(public_dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Fingerprinter {
            public_dir: public_dir.into(),
            enabled,
        }
    }

    /// Rewrite a public URL to its content-fingerprinted form.
    pub fn fingerprint(&self, url: &str) -> String {
        if !self.enabled {
            return url.to_string();
        }

        let file = self.public_dir.join(url.trim_start_matches('/'));
        if !file.is_file() {
            return url.to_string();
        }

        let hash = match sha256_file(&file) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!("failed to fingerprint {}: {}", file.display(), e);
                return url.to_string();
            }
        };

        match url.rfind('.') {
            Some(dot) => format!(
                "{}-{}{}",
                &url[..dot],
                &hash[..FINGERPRINT_LEN],
                &url[dot..]
            ),
            None => url.to_string(),
        }
    }
}
