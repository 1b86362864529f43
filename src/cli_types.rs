use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "taggrep",
    version,
    about = "Query tagged code blocks across a project tree"
)]
pub struct Cli {
    /// Print progress and diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tagged code blocks matching a query
    Extract(ExtractArgs),
    /// Ensure the tagging guide exists at a project root and print usage guidance
    Instructions(InstructionsArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Directory to scan
    pub path: PathBuf,

    /// Query expression, e.g. "[feature:auth]&[layer:service]".
    /// Empty matches every tagged block.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Do not consult .gitignore at the scan root
    #[arg(long)]
    pub no_gitignore: bool,
}

#[derive(Debug, Args)]
pub struct InstructionsArgs {
    /// Project root for the tagging guide
    pub path: PathBuf,
}
