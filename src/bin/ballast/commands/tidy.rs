//! `ballast tidy` command

use std::path::Path;

use anyhow::Result;

use ballast::ops::tidy;

use crate::cli::TidyArgs;
use crate::commands::load_pipeline;

pub fn execute(_args: TidyArgs, config_path: &Path, environment: &str) -> Result<()> {
    let mut pipeline = load_pipeline(config_path, environment)?;

    let summary = tidy(&mut pipeline)?;

    eprintln!(
        "Removed {} stylesheets and {} scripts.",
        summary.stylesheets, summary.scripts
    );
    if summary.manifest_removed {
        eprintln!("Manifest file tidied up.");
    }
    eprintln!("The filesystem has been tidied up.");

    Ok(())
}
