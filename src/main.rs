use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taggrep::cli::CliApp;
use taggrep::cli_types::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "taggrep=debug" } else { "taggrep=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = CliApp::new(cli.verbose, !cli.no_color);
    match cli.command {
        Command::Extract(args) => app.extract(args).await,
        Command::Instructions(args) => app.instructions(args).await,
    }
}
