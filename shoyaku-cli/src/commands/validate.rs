//! Validate command implementation

use anyhow::Result;
use clap::Args;
use shoyaku_core::{Lexicon, LexiconConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'l', long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        let result = LexiconConfig::from_file(&self.lexicon).and_then(|config| {
            let compiled = Lexicon::from_configs(std::slice::from_ref(&config))?;
            Ok((config, compiled))
        });

        match result {
            Ok((config, compiled)) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", config.metadata.code);
                println!("  Language name: {}", config.metadata.name);
                println!("  Stopwords: {}", compiled.stopword_count());
                println!("  Lead-ins: {}", compiled.lead_in_count());
                println!("  Denied topics: {}", compiled.denylist_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
