//! shoyaku command-line entry point

use anyhow::Result;
use clap::Parser;
use shoyaku_cli::commands::Commands;

/// Extractive summaries, key points and themes for English and Japanese text
#[derive(Debug, Parser)]
#[command(name = "shoyaku", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
