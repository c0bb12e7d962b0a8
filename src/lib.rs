//! Ballast - a manifest-backed asset build pipeline
//!
//! This crate provides the core library functionality for Ballast,
//! including collection resolution, development publishing, and
//! content-fingerprinted production bundling.

pub mod builder;
pub mod cdn;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod fingerprint;
pub mod ops;
pub mod transform;
pub mod util;

pub use crate::core::{collection::CollectionRegistry, manifest::Manifest, reference::AssetKind};

pub use builder::pipeline::{Pipeline, RenderOutcome};
pub use config::AssetConfig;
pub use error::BallastError;
