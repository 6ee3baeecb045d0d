//! Chapter orchestration and whole-document analysis

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::document::{Chapter, Document, ProcessedChapter, ProcessedContent, Summary};
use crate::error::Result;
use crate::extract;
use crate::lexicon::Lexicon;
use crate::word_count;

/// Stateless analysis service.
///
/// Holds a validated configuration, a shared lexicon and, when chapters run in
/// parallel, a dedicated worker pool. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    lexicon: Arc<Lexicon>,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Analyzer {
    /// Analyzer with the default configuration and builtin lexicon.
    ///
    /// Falls back to sequential chapter processing if the worker pool cannot
    /// be started.
    pub fn new() -> Self {
        match Self::with_config(AnalysisConfig::default()) {
            Ok(analyzer) => analyzer,
            Err(e) => {
                log::warn!("Falling back to sequential analysis: {e}");
                Self::sequential()
            }
        }
    }

    /// Analyzer that never spawns worker threads
    pub fn sequential() -> Self {
        let config = AnalysisConfig {
            parallel_chapters: false,
            ..AnalysisConfig::default()
        };
        Self {
            config,
            lexicon: Lexicon::builtin(),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Analyzer with a custom configuration and the builtin lexicon
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        Self::with_lexicon(config, Lexicon::builtin())
    }

    /// Analyzer with a custom configuration and lexicon
    pub fn with_lexicon(config: AnalysisConfig, lexicon: Arc<Lexicon>) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = if config.parallel_chapters {
            let threads = config.threads.unwrap_or_else(num_cpus::get);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("shoyaku-worker-{i}"))
                .build()?;
            log::debug!("Started chapter pool with {threads} threads");
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Self {
            config,
            lexicon,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn build_summary(&self, text: &str) -> Summary {
        extract::build_summary(text, &self.config, &self.lexicon)
    }

    pub fn extract_key_points(&self, text: &str) -> Vec<String> {
        extract::extract_key_points(text, &self.config, &self.lexicon)
    }

    pub fn extract_themes(&self, text: &str) -> Vec<String> {
        extract::extract_themes(text, self.config.max_themes, &self.lexicon)
    }

    pub fn extract_topics(&self, text: &str) -> Vec<String> {
        extract::extract_topics(text, self.config.max_topics, &self.lexicon)
    }

    pub fn count_words(&self, text: &str) -> usize {
        word_count::count_words(text)
    }

    /// Analyze one chapter against its own content only
    pub fn process_chapter(&self, chapter: &Chapter) -> ProcessedChapter {
        let content = chapter.content.as_str();
        ProcessedChapter {
            title: chapter.title.clone(),
            content: chapter.content.clone(),
            page_numbers: chapter.page_numbers.clone(),
            summary: extract::summarize(
                content,
                self.config.chapter_summary_sentences,
                &self.config,
                &self.lexicon,
            ),
            key_points: self.extract_key_points(content),
            word_count: self.count_words(content),
            main_topics: self.extract_topics(content),
        }
    }

    /// Analyze every chapter, returning results in input order
    pub fn process_chapters(&self, chapters: &[Chapter]) -> Vec<ProcessedChapter> {
        log::debug!("Processing {} chapters", chapters.len());

        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = self.pool.as_ref().filter(|_| chapters.len() > 1) {
                return pool.install(|| {
                    chapters
                        .par_iter()
                        .map(|chapter| self.process_chapter(chapter))
                        .collect()
                });
            }
        }

        chapters
            .iter()
            .map(|chapter| self.process_chapter(chapter))
            .collect()
    }

    /// Analyze a whole document
    pub fn process_content(&self, document: &Document) -> ProcessedContent {
        let text = document.full_text.as_str();
        log::info!(
            "Analyzing document: {} chars, {} chapters",
            text.chars().count(),
            document.chapters.len()
        );

        ProcessedContent {
            chapters: self.process_chapters(&document.chapters),
            summary: self.build_summary(text),
            key_points: self.extract_key_points(text),
            themes: self.extract_themes(text),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
