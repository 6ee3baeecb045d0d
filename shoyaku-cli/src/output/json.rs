//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use shoyaku_core::ProcessedContent;
use std::io::Write;

/// JSON formatter - outputs one report per input file as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<FileReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Input file the analysis came from
    pub source: String,
    #[serde(flatten)]
    pub analysis: ProcessedContent,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, content: &ProcessedContent) -> Result<()> {
        self.reports.push(FileReport {
            source: source.to_string(),
            analysis: content.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
