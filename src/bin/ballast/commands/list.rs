//! `ballast list` command

use std::path::Path;

use anyhow::Result;

use ballast::AssetConfig;

use crate::cli::ListArgs;

pub fn execute(_args: ListArgs, config_path: &Path) -> Result<()> {
    let config = AssetConfig::load_or_default(config_path);

    if config.collections.is_empty() {
        eprintln!("No collections configured.");
        return Ok(());
    }

    for (name, refs) in &config.collections {
        println!("{} ({} assets)", name, refs.len());
        for reference in refs {
            println!("  {}", reference);
        }
    }

    Ok(())
}
