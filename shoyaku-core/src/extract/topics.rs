//! Topic extraction from capitalized phrases

use crate::frequency::FrequencyTable;
use crate::lexicon::Lexicon;
use regex::Regex;
use std::sync::OnceLock;

fn capitalized_phrases() -> &'static Regex {
    static PHRASES: OnceLock<Regex> = OnceLock::new();
    PHRASES.get_or_init(|| {
        Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("phrase pattern is valid")
    })
}

/// The `limit` most frequent capitalized phrases of `text`.
///
/// Phrases on the lexicon's topic denylist are skipped. Whitespace inside a
/// phrase is normalized to single spaces before counting.
pub fn extract_topics(text: &str, limit: usize, lexicon: &Lexicon) -> Vec<String> {
    let counts: FrequencyTable = capitalized_phrases()
        .find_iter(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|phrase| !lexicon.is_denied_topic(phrase))
        .collect();

    counts
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(phrase, _)| phrase.to_string())
        .collect()
}
