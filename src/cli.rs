use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "caiso-paths",
    version,
    about = "Resolve the project root and data directories"
)]
pub struct Cli {
    /// Resolve as if started from this directory instead of the current one.
    #[arg(short = 'C', long = "chdir", global = true)]
    pub chdir: Option<PathBuf>,
    /// Report paths without creating any directories.
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the project root.
    Root,
    /// Print root, raw, processed and outputs, creating the writable ones.
    Paths(PathsArgs),
}

#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Emit a single JSON object instead of tab-separated lines.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
