//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use shoyaku_core::lexicon::builtin_configs;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize documents and extract key points, themes and topics
    Analyze(analyze::AnalyzeArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List builtin lexicons
    Lexicons,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text - Readable report per input file");
                println!("  json - JSON array of analysis results");
            }
            ListCommands::Lexicons => {
                println!("Builtin lexicons:");
                for config in builtin_configs()? {
                    println!(
                        "  {} - {} ({} stopwords, {} lead-ins, {} denied topics)",
                        config.metadata.code,
                        config.metadata.name,
                        config.stopwords.words.len(),
                        config.key_points.lead_ins.len(),
                        config.topics.denylist.len()
                    );
                }
            }
        }
        Ok(())
    }
}
