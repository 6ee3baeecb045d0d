//! Output formatting module

use anyhow::Result;
use shoyaku_core::ProcessedContent;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the analysis of one input file
    fn format_result(&mut self, source: &str, content: &ProcessedContent) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
