//! High-level operations.
//!
//! This module contains the implementation of Ballast commands.

pub mod build;
pub mod tidy;

pub use build::{build, BuildOptions, BuildReport, BuildStatus};
pub use tidy::{tidy, TidySummary};
