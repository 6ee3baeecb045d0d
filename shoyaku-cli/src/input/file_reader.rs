//! File reading utilities

use anyhow::{Context, Result};
use shoyaku_core::{Chapter, Document};
use std::fs;
use std::path::Path;

/// Reads input files as analysis documents
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file as a [`Document`].
    ///
    /// `.json` files hold a serialized document. Anything else is plain text
    /// forming a single chapter titled after the file stem, with
    /// `--- Page N ---` marker lines stripped and recorded as page numbers.
    pub fn read_document(path: &Path) -> Result<Document> {
        let content = Self::read_text(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            return serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse document: {}", path.display()));
        }

        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (text, pages) = split_pages(&content);
        log::debug!(
            "Read {} as text: {} chars, {} page markers",
            path.display(),
            text.chars().count(),
            pages.len()
        );

        Ok(Document::new(
            text.clone(),
            vec![Chapter::new(title, text).with_pages(pages)],
        ))
    }
}

/// Strip page marker lines, returning the remaining text and the page numbers
pub fn split_pages(content: &str) -> (String, Vec<u32>) {
    let mut pages = Vec::new();
    let mut lines = Vec::new();

    for line in content.lines() {
        match page_marker(line) {
            Some(page) => pages.push(page),
            None => lines.push(line),
        }
    }

    (lines.join("\n").trim().to_string(), pages)
}

fn page_marker(line: &str) -> Option<u32> {
    line.trim()
        .strip_prefix("--- Page ")?
        .strip_suffix(" ---")?
        .trim()
        .parse()
        .ok()
}
