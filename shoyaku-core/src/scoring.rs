//! Frequency-based sentence scoring
//!
//! A sentence's score is the mean document frequency of its countable
//! tokens. Sentences with no countable token score 0.

use crate::frequency::FrequencyTable;
use crate::lexicon::Lexicon;
use crate::script::Script;
use crate::sentence::Sentence;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};

/// A sentence paired with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Score `sentences` against the frequency table of `source`.
///
/// The result is sorted by descending score. The sort is stable, so sentences
/// with equal scores stay in source order.
pub fn score_sentences(sentences: &[Sentence], source: &str, lexicon: &Lexicon) -> Vec<ScoredSentence> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let script = Script::detect(source);
    let table = FrequencyTable::build(source, script, lexicon);
    log::trace!(
        "Scoring {} sentences against {} distinct terms ({script})",
        sentences.len(),
        table.len()
    );

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|sentence| ScoredSentence {
            score: sentence_score(sentence.as_str(), script, &table, lexicon),
            sentence: sentence.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Mean table count over the countable tokens of `text`
pub fn sentence_score(text: &str, script: Script, table: &FrequencyTable, lexicon: &Lexicon) -> f64 {
    let (sum, countable) = tokenize(text, script)
        .filter(|token| lexicon.is_countable(token))
        .fold((0usize, 0usize), |(sum, countable), token| {
            (sum + table.count(&token), countable + 1)
        });

    if countable == 0 {
        0.0
    } else {
        sum as f64 / countable as f64
    }
}

/// Texts of the `n` best sentences, in score order
pub fn top_texts(scored: &[ScoredSentence], n: usize) -> impl Iterator<Item = &str> + '_ {
    scored.iter().take(n).map(|s| s.sentence.as_str())
}
