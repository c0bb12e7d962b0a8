//! `ballast build` command

use std::path::Path;

use anyhow::Result;

use ballast::ops::{build, BuildOptions, BuildStatus};
use ballast::AssetKind;

use crate::cli::BuildArgs;
use crate::commands::load_pipeline;

pub fn execute(args: BuildArgs, config_path: &Path, environment: &str) -> Result<()> {
    let mut pipeline = load_pipeline(config_path, environment)?;

    if args.production {
        eprintln!("Starting production build...");
    } else {
        eprintln!("Starting development build...");
    }

    if let Some(name) = &args.collection {
        if !pipeline.registry().has(name) {
            eprintln!("[{}] Collection not found.", name);
            return Ok(());
        }
    }

    let opts = BuildOptions {
        collection: args.collection,
        production: args.production,
    };

    let reports = build(&mut pipeline, &opts)?;

    for report in &reports {
        let label = match report.kind {
            AssetKind::Style => "Stylesheets",
            AssetKind::Script => "Scripts",
        };

        match report.status {
            BuildStatus::Built => {
                eprintln!("[{}] {} successfully built.", report.collection, label);
            }
            BuildStatus::Skipped => {
                eprintln!("[{}] {} already up to date.", report.collection, label);
            }
            BuildStatus::NotRequired => {
                eprintln!(
                    "[{}] {} build was not required for collection.",
                    report.collection, label
                );
            }
        }
    }

    Ok(())
}
