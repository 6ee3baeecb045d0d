//! Input documents and analysis results

use serde::{Deserialize, Serialize};

/// Extracted book text with its chapter structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Document {
    pub fn new(full_text: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            full_text: full_text.into(),
            chapters,
        }
    }

    /// Unstructured text as a single chapter spanning the whole document
    pub fn from_text(title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            chapters: vec![Chapter::new(title, text.clone())],
            full_text: text,
        }
    }
}

/// One structural unit of the source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub page_numbers: Vec<u32>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            page_numbers: Vec::new(),
        }
    }

    pub fn with_pages(mut self, page_numbers: Vec<u32>) -> Self {
        self.page_numbers = page_numbers;
        self
    }
}

/// Brief, detailed and executive extractive summaries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub brief: String,
    pub detailed: String,
    pub executive: String,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.brief.is_empty() && self.detailed.is_empty() && self.executive.is_empty()
    }
}

/// A chapter together with its analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedChapter {
    pub title: String,
    pub content: String,
    pub page_numbers: Vec<u32>,
    pub summary: String,
    pub key_points: Vec<String>,
    pub word_count: usize,
    pub main_topics: Vec<String>,
}

/// Complete analysis of a [`Document`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedContent {
    pub summary: Summary,
    pub chapters: Vec<ProcessedChapter>,
    pub key_points: Vec<String>,
    pub themes: Vec<String>,
}
