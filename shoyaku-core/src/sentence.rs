//! Sentence splitting
//!
//! Candidates are cut at runs of sentence-final punctuation (ASCII and
//! full-width) and trimmed. Only candidates whose character length falls
//! strictly between the configured bounds survive; fragments such as headings
//! or page numbers are dropped before they can be scored.

use crate::config::defaults;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn terminator_runs() -> &'static Regex {
    static TERMINATORS: OnceLock<Regex> = OnceLock::new();
    TERMINATORS.get_or_init(|| Regex::new(r"[.!?。！？]+").expect("terminator pattern is valid"))
}

/// A trimmed sentence taken verbatim from the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
}

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Sentence splitter with exclusive length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSplitter {
    min_chars: usize,
    max_chars: usize,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(defaults::MIN_SENTENCE_CHARS, defaults::MAX_SENTENCE_CHARS)
    }
}

impl SentenceSplitter {
    /// Keep candidates with `min_chars < length < max_chars`
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }

    /// Split `text` into sentences in source order
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        terminator_runs()
            .split(text)
            .map(str::trim)
            .filter(|candidate| {
                let len = candidate.chars().count();
                len > self.min_chars && len < self.max_chars
            })
            .map(Sentence::new)
            .collect()
    }
}

/// Split with the default bounds
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    SentenceSplitter::default().split(text)
}
