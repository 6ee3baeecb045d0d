//! Extractive summaries

use crate::config::AnalysisConfig;
use crate::document::Summary;
use crate::lexicon::Lexicon;
use crate::scoring::{score_sentences, top_texts, ScoredSentence};

/// Brief, detailed and executive summaries of `text`.
///
/// Sentences are scored once against the text itself; each summary joins a
/// prefix of the same ranking with single spaces.
pub fn build_summary(text: &str, config: &AnalysisConfig, lexicon: &Lexicon) -> Summary {
    let scored = rank(text, config, lexicon);
    log::debug!("Building summary from {} candidate sentences", scored.len());

    Summary {
        brief: join_top(&scored, config.brief_sentences),
        detailed: join_top(&scored, config.detailed_sentences),
        executive: join_top(&scored, config.executive_sentences),
    }
}

/// The `sentences` best sentences of `text`, joined with single spaces
pub fn summarize(text: &str, sentences: usize, config: &AnalysisConfig, lexicon: &Lexicon) -> String {
    join_top(&rank(text, config, lexicon), sentences)
}

fn rank(text: &str, config: &AnalysisConfig, lexicon: &Lexicon) -> Vec<ScoredSentence> {
    let sentences = config.splitter().split(text);
    score_sentences(&sentences, text, lexicon)
}

fn join_top(scored: &[ScoredSentence], n: usize) -> String {
    top_texts(scored, n).collect::<Vec<_>>().join(" ")
}
