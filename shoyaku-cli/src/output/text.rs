//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use shoyaku_core::ProcessedContent;
use std::io::Write;

/// Plain text formatter - outputs a readable report per input file
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    fn list(&mut self, indent: &str, items: &[String]) -> Result<()> {
        if items.is_empty() {
            writeln!(self.writer, "{indent}(none)")?;
        }
        for item in items {
            writeln!(self.writer, "{indent}- {item}")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, content: &ProcessedContent) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;

        writeln!(self.writer, "# {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Brief summary:")?;
        writeln!(self.writer, "  {}", content.summary.brief)?;
        writeln!(self.writer, "Executive summary:")?;
        writeln!(self.writer, "  {}", content.summary.executive)?;
        writeln!(self.writer, "Detailed summary:")?;
        writeln!(self.writer, "  {}", content.summary.detailed)?;
        writeln!(self.writer, "Key points:")?;
        self.list("  ", &content.key_points)?;
        writeln!(self.writer, "Themes: {}", content.themes.join(", "))?;

        for (i, chapter) in content.chapters.iter().enumerate() {
            writeln!(self.writer)?;
            write!(self.writer, "## Chapter {}: {}", i + 1, chapter.title)?;
            match (chapter.page_numbers.first(), chapter.page_numbers.last()) {
                (Some(first), Some(last)) if first != last => {
                    write!(self.writer, " (pages {first}-{last})")?
                }
                (Some(page), _) => write!(self.writer, " (page {page})")?,
                _ => {}
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "Words: {}", chapter.word_count)?;
            writeln!(self.writer, "Summary: {}", chapter.summary)?;
            writeln!(self.writer, "Topics: {}", chapter.main_topics.join(", "))?;
            writeln!(self.writer, "Key points:")?;
            self.list("  ", &chapter.key_points)?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoyaku_core::{ProcessedChapter, Summary};

    fn render(content: &ProcessedContent) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_result("notes.txt", content).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let content = ProcessedContent {
            summary: Summary {
                brief: "Short version".into(),
                detailed: "Long version".into(),
                executive: "Middle version".into(),
            },
            chapters: vec![ProcessedChapter {
                title: "Harbor".into(),
                page_numbers: vec![3, 4, 5],
                summary: "Ships dock here".into(),
                word_count: 42,
                main_topics: vec!["Lisbon".into(), "Porto".into()],
                ..Default::default()
            }],
            key_points: vec!["Thus trade grew".into()],
            themes: vec!["Ships".into(), "Harbor".into()],
        };

        let output = render(&content);
        assert!(output.starts_with("# notes.txt"));
        assert!(output.contains("  Short version"));
        assert!(output.contains("  - Thus trade grew"));
        assert!(output.contains("Themes: Ships, Harbor"));
        assert!(output.contains("## Chapter 1: Harbor (pages 3-5)"));
        assert!(output.contains("Words: 42"));
        assert!(output.contains("Topics: Lisbon, Porto"));
        assert!(output.contains("  (none)"));
    }

    #[test]
    fn test_single_page_chapter() {
        let content = ProcessedContent {
            chapters: vec![ProcessedChapter {
                title: "Note".into(),
                page_numbers: vec![9],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(render(&content).contains("## Chapter 1: Note (page 9)"));
    }
}
