//! Key point extraction
//!
//! Sentences opening with a lead-in phrase ("In conclusion", "The main", ...)
//! are taken in source order. When none opens that way, the best scored
//! sentences stand in.

use crate::config::AnalysisConfig;
use crate::lexicon::Lexicon;
use crate::scoring::{score_sentences, top_texts};

/// Up to `config.max_key_points` key sentences of `text`
pub fn extract_key_points(text: &str, config: &AnalysisConfig, lexicon: &Lexicon) -> Vec<String> {
    let sentences = config.splitter().split(text);

    let mut points: Vec<String> = sentences
        .iter()
        .filter(|sentence| lexicon.matches_lead_in(sentence.as_str()))
        .take(config.max_key_points)
        .map(|sentence| sentence.text.clone())
        .collect();

    if points.is_empty() {
        log::trace!("No lead-in matched, falling back to sentence scores");
        let scored = score_sentences(&sentences, text, lexicon);
        points = top_texts(&scored, config.fallback_key_points)
            .map(str::to_string)
            .collect();
    }

    points.truncate(config.max_key_points);
    points
}
