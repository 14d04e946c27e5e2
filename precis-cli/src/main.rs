//! precis command-line entry point

use anyhow::Result;
use clap::Parser;
use precis_cli::commands::Commands;

/// Explainable extractive summarization
#[derive(Debug, Parser)]
#[command(name = "precis", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
