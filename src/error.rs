//! Error types for Ballast.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors.
///
/// Per-asset failures are not represented here: a missing local asset
/// degrades to an inline diagnostic comment (development) or empty
/// content (production), and manifest persistence reports a boolean.
#[derive(Debug, Error)]
pub enum BallastError {
    /// Production mode requires the public output root to exist.
    #[error("public directory not found: {path}")]
    PublicDirMissing { path: PathBuf },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
