//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Ballast - a manifest-backed asset build pipeline
#[derive(Parser)]
#[command(name = "ballast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = "ballast.toml")]
    pub config: PathBuf,

    /// Environment name; production behavior is decided by the
    /// configuration's allowed-environment list
    #[arg(long, global = true, env = "BALLAST_ENV", default_value = "local")]
    pub env: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build asset collections
    Build(BuildArgs),

    /// Remove built artifacts and the build manifest
    Tidy(TidyArgs),

    /// List configured collections
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// The asset collection to build (all collections if omitted)
    pub collection: Option<String>,

    /// Build assets for a production environment
    #[arg(short, long)]
    pub production: bool,
}

#[derive(Args)]
pub struct TidyArgs {}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
