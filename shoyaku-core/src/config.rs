//! Analysis configuration

use crate::error::{Error, Result};
use crate::sentence::SentenceSplitter;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Sentences must be longer than this many characters
    pub const MIN_SENTENCE_CHARS: usize = 10;

    /// Sentences must be shorter than this many characters
    pub const MAX_SENTENCE_CHARS: usize = 500;

    /// Sentences in the brief summary
    pub const BRIEF_SENTENCES: usize = 3;

    /// Sentences in the detailed summary
    pub const DETAILED_SENTENCES: usize = 8;

    /// Sentences in the executive summary
    pub const EXECUTIVE_SENTENCES: usize = 5;

    /// Sentences in each chapter summary
    pub const CHAPTER_SUMMARY_SENTENCES: usize = 3;

    /// Upper bound on key points
    pub const MAX_KEY_POINTS: usize = 10;

    /// Scored sentences used when no lead-in matches
    pub const FALLBACK_KEY_POINTS: usize = 5;

    /// Upper bound on themes
    pub const MAX_THEMES: usize = 10;

    /// Upper bound on topics per chapter
    pub const MAX_TOPICS: usize = 5;
}

/// Tunables for every extraction routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub min_sentence_chars: usize,
    pub max_sentence_chars: usize,
    pub brief_sentences: usize,
    pub detailed_sentences: usize,
    pub executive_sentences: usize,
    pub chapter_summary_sentences: usize,
    pub max_key_points: usize,
    pub fallback_key_points: usize,
    pub max_themes: usize,
    pub max_topics: usize,
    /// Process chapters on a worker pool (needs the `parallel` feature)
    pub parallel_chapters: bool,
    /// Worker threads; None = one per CPU
    pub threads: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: defaults::MIN_SENTENCE_CHARS,
            max_sentence_chars: defaults::MAX_SENTENCE_CHARS,
            brief_sentences: defaults::BRIEF_SENTENCES,
            detailed_sentences: defaults::DETAILED_SENTENCES,
            executive_sentences: defaults::EXECUTIVE_SENTENCES,
            chapter_summary_sentences: defaults::CHAPTER_SUMMARY_SENTENCES,
            max_key_points: defaults::MAX_KEY_POINTS,
            fallback_key_points: defaults::FALLBACK_KEY_POINTS,
            max_themes: defaults::MAX_THEMES,
            max_topics: defaults::MAX_TOPICS,
            parallel_chapters: cfg!(feature = "parallel"),
            threads: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Sentence splitter honoring the configured length bounds
    pub fn splitter(&self) -> SentenceSplitter {
        SentenceSplitter::new(self.min_sentence_chars, self.max_sentence_chars)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_sentence_chars >= self.max_sentence_chars {
            return Err(Error::Configuration(format!(
                "min_sentence_chars ({}) must be less than max_sentence_chars ({})",
                self.min_sentence_chars, self.max_sentence_chars
            )));
        }

        if self.threads == Some(0) {
            return Err(Error::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        if self.parallel_chapters && !cfg!(feature = "parallel") {
            return Err(Error::Configuration(
                "parallel_chapters requires the `parallel` feature".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`AnalysisConfig`]
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive character bounds for candidate sentences
    pub fn sentence_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        let config = &mut self.config;
        config.min_sentence_chars = min_chars;
        config.max_sentence_chars = max_chars;
        self
    }

    /// Sentence counts for the brief, detailed and executive summaries
    pub fn summary_sentences(mut self, brief: usize, detailed: usize, executive: usize) -> Self {
        let config = &mut self.config;
        config.brief_sentences = brief;
        config.detailed_sentences = detailed;
        config.executive_sentences = executive;
        self
    }

    pub fn chapter_summary_sentences(mut self, count: usize) -> Self {
        self.config.chapter_summary_sentences = count;
        self
    }

    pub fn max_key_points(mut self, count: usize) -> Self {
        self.config.max_key_points = count;
        self
    }

    pub fn fallback_key_points(mut self, count: usize) -> Self {
        self.config.fallback_key_points = count;
        self
    }

    pub fn max_themes(mut self, count: usize) -> Self {
        self.config.max_themes = count;
        self
    }

    pub fn max_topics(mut self, count: usize) -> Self {
        self.config.max_topics = count;
        self
    }

    /// Enable or disable the chapter worker pool
    pub fn parallel_chapters(mut self, enabled: bool) -> Self {
        self.config.parallel_chapters = enabled;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalysisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_sentence_chars, 10);
        assert_eq!(config.max_sentence_chars, 500);
        assert_eq!(
            (
                config.brief_sentences,
                config.detailed_sentences,
                config.executive_sentences
            ),
            (3, 8, 5)
        );
        assert_eq!(config.max_key_points, 10);
        assert_eq!(config.max_themes, 10);
        assert_eq!(config.max_topics, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::builder()
            .sentence_bounds(5, 200)
            .summary_sentences(1, 2, 3)
            .max_themes(4)
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.min_sentence_chars, 5);
        assert_eq!(config.max_sentence_chars, 200);
        assert_eq!(config.brief_sentences, 1);
        assert_eq!(config.executive_sentences, 3);
        assert_eq!(config.max_themes, 4);
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = AnalysisConfig::builder().sentence_bounds(50, 50).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = AnalysisConfig::builder().threads(Some(0)).build();
        match result {
            Err(Error::Configuration(msg)) => assert!(msg.contains("threads")),
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalysisConfig = toml::from_str("max_themes = 3").unwrap();
        assert_eq!(config.max_themes, 3);
        assert_eq!(config.max_key_points, defaults::MAX_KEY_POINTS);
    }
}
