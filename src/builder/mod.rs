//! The asset build engine.
//!
//! `resolver` turns references into content, `development` publishes assets
//! individually, `production` concatenates/minifies/fingerprints them, and
//! `pipeline` wires the pieces together behind the render entry point.

pub mod development;
pub mod html;
pub mod pipeline;
pub mod production;
pub mod resolver;

pub use pipeline::{Pipeline, RenderOutcome};
pub use resolver::{AssetResolver, ResolvedAsset};
