//! Extractive summarization for English and Japanese text
//!
//! This crate turns a book-like [`Document`] into a [`ProcessedContent`]:
//! multi-length summaries, key points, themes, and per-chapter summaries,
//! key points, word counts and topics. Everything is extractive and
//! frequency based; no sentence is ever rewritten.
//!
//! # Architecture
//!
//! Text flows one way through the pipeline:
//! - **Script**: classify characters and detect Latin or CJK text
//! - **Tokenizer**: script-aware tokens, case folded for Latin text
//! - **Lexicon**: embedded stopwords, lead-in patterns and topic denylist
//! - **Frequency / Scoring**: term counts and mean-frequency sentence scores
//! - **Extract**: summaries, key points, themes and topics
//! - **Analyzer**: per-chapter orchestration, optionally on a thread pool
//!
//! # Example
//!
//! ```rust
//! use shoyaku_core::{Analyzer, Chapter, Document};
//!
//! let text = "The main idea is clear. Rivers shape valleys over time. \
//!             Rivers also carry sediment to the sea.";
//! let document = Document::new(text, vec![Chapter::new("Rivers", text)]);
//!
//! let analyzer = Analyzer::new();
//! let content = analyzer.process_content(&document);
//!
//! assert_eq!(content.key_points, vec!["The main idea is clear"]);
//! assert_eq!(content.chapters.len(), 1);
//! assert_eq!(content.themes[0], "Rivers");
//! ```

pub mod analyzer;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod lexicon;
pub mod scoring;
pub mod script;
pub mod sentence;
pub mod tokenizer;
pub mod word_count;

pub use analyzer::Analyzer;
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use document::{Chapter, Document, ProcessedChapter, ProcessedContent, Summary};
pub use error::{Error, Result};
pub use lexicon::{Lexicon, LexiconConfig};
pub use scoring::ScoredSentence;
pub use script::{CharClass, Script};
pub use sentence::{Sentence, SentenceSplitter};
pub use word_count::count_words;

/// Summaries of `text` with the default configuration
pub fn build_summary(text: &str) -> Summary {
    Analyzer::sequential().build_summary(text)
}

/// Key points of `text` with the default configuration
pub fn extract_key_points(text: &str) -> Vec<String> {
    Analyzer::sequential().extract_key_points(text)
}

/// Themes of `text` with the default configuration
pub fn extract_themes(text: &str) -> Vec<String> {
    Analyzer::sequential().extract_themes(text)
}

/// Topics of `text` with the default configuration
pub fn extract_topics(text: &str) -> Vec<String> {
    Analyzer::sequential().extract_topics(text)
}

/// Analyze chapters sequentially with the default configuration
pub fn process_chapters(chapters: &[Chapter]) -> Vec<ProcessedChapter> {
    Analyzer::sequential().process_chapters(chapters)
}

/// Analyze a document sequentially with the default configuration
pub fn process_content(document: &Document) -> ProcessedContent {
    Analyzer::sequential().process_content(document)
}
