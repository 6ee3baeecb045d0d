//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new lexicon
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Fill in the stopwords, lead-ins and topic denylist");
        println!("2. Validate your lexicon:");
        println!("   shoyaku validate --lexicon {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   shoyaku analyze -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon for {code}

[metadata]
code = "{code}"
name = "Custom Lexicon"

# Function words excluded from term frequencies.
# Latin text is lowercased before lookup; CJK tokens are compared as written.
[stopwords]
words = [
    "the", "a", "an",
]

# Case-insensitive regular expressions matched against the start of each
# sentence. Matching sentences become key points.
[key_points]
lead_ins = [
    # '^(In short|To sum up)',
]

# Capitalized phrases never reported as chapter topics
[topics]
denylist = [
    # "Monday", "January",
]
"#,
            code = self.language_code
        )
    }
}
