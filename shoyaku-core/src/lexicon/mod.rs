//! Stopwords, key-point lead-ins and the topic denylist
//!
//! A [`Lexicon`] merges any number of [`LexiconConfig`] tables. The builtin
//! one combines the embedded English and Japanese tables and is shared
//! read-only by every analysis.

pub mod config;
mod loader;

pub use config::LexiconConfig;
pub use loader::{builtin_configs, with_extra};

use crate::error::{Error, Result};
use crate::script::CharClass;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::Arc;

/// Compiled lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    languages: Vec<String>,
    stopwords: HashSet<String>,
    lead_ins: Vec<Regex>,
    topic_denylist: HashSet<String>,
}

impl Lexicon {
    /// The shared lexicon built from the embedded tables
    pub fn builtin() -> Arc<Lexicon> {
        loader::builtin()
    }

    /// Compile and merge lexicon tables, in order
    pub fn from_configs(configs: &[LexiconConfig]) -> Result<Self> {
        let mut lexicon = Lexicon {
            languages: Vec::with_capacity(configs.len()),
            stopwords: HashSet::new(),
            lead_ins: Vec::new(),
            topic_denylist: HashSet::new(),
        };

        for config in configs {
            config.validate()?;
            lexicon.languages.push(config.metadata.code.clone());
            lexicon
                .stopwords
                .extend(config.stopwords.words.iter().map(|w| w.trim().to_string()));
            for pattern in &config.key_points.lead_ins {
                lexicon.lead_ins.push(compile_lead_in(pattern)?);
            }
            lexicon
                .topic_denylist
                .extend(config.topics.denylist.iter().cloned());
        }

        Ok(lexicon)
    }

    /// Whether `term` is a function word in any loaded language
    #[inline]
    pub fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    /// Whether `term` contributes to frequency counts.
    ///
    /// Stopwords never count. Other terms count when they are longer than one
    /// character; a lone kanji also counts since it is a full word on its own.
    pub fn is_countable(&self, term: &str) -> bool {
        if self.is_stopword(term) {
            return false;
        }

        let mut chars = term.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(ch), None) => CharClass::of(ch) == CharClass::Han,
            (Some(_), Some(_)) => true,
        }
    }

    /// Whether `sentence` opens with one of the key-point lead-ins
    pub fn matches_lead_in(&self, sentence: &str) -> bool {
        let sentence = sentence.trim_start();
        self.lead_ins.iter().any(|re| re.is_match(sentence))
    }

    /// Whether a capitalized phrase is excluded from topics
    #[inline]
    pub fn is_denied_topic(&self, phrase: &str) -> bool {
        self.topic_denylist.contains(phrase)
    }

    /// Language codes of the merged tables, in load order
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn lead_in_count(&self) -> usize {
        self.lead_ins.len()
    }

    pub fn denylist_count(&self) -> usize {
        self.topic_denylist.len()
    }
}

fn compile_lead_in(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
