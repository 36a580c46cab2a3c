pub mod base_branch;
pub mod init;
pub mod resolve;
pub mod schema;

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "specpr")]
#[command(
    author,
    version,
    about = "Synthesize PR-style change info for CI runs that have no pull request yet"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a speculative base branch and print PR-shaped change info
    Resolve(ResolveArgs),

    /// Print only the resolved speculative base branch name
    BaseBranch(BaseBranchArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ResolveArgs {
    /// Path to config file
    #[arg(short, long, default_value = "specpr.yaml")]
    pub config: PathBuf,

    /// Override git working directory
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Override remote to fetch base branches from
    #[arg(long)]
    pub remote: Option<String>,

    /// Override base branch patterns (comma-separated, highest priority first)
    #[arg(long, value_delimiter = ',')]
    pub branches: Option<Vec<String>>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Exit 1 when no speculative context is found (CI mode)
    #[arg(long)]
    pub fail_on_none: bool,
}

#[derive(Parser, Clone)]
pub struct BaseBranchArgs {
    /// Path to config file
    #[arg(short, long, default_value = "specpr.yaml")]
    pub config: PathBuf,

    /// Override git working directory
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Override base branch patterns (comma-separated, highest priority first)
    #[arg(long, value_delimiter = ',')]
    pub branches: Option<Vec<String>>,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(short, long, default_value = "specpr.yaml")]
    pub config: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Load config from `path`, falling back to defaults when the file does not
/// exist so CLI overrides alone are enough to run.
pub fn load_or_default(path: &Path) -> Result<Config, crate::error::ConfigError> {
    if path.exists() {
        Config::load(path)
    } else {
        debug!("No config file at {:?}, using defaults", path);
        Ok(Config::default())
    }
}
