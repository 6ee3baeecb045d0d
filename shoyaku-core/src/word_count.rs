//! Script-aware word counts

use crate::script::Script;

/// Count words in `text`, detecting its script first
pub fn count_words(text: &str) -> usize {
    count_words_in(text, Script::detect(text))
}

/// Count words in `text` for an already detected script.
///
/// CJK text has no word separators, so every non-whitespace character counts.
pub fn count_words_in(text: &str, script: Script) -> usize {
    match script {
        Script::Cjk => text.chars().filter(|ch| !ch.is_whitespace()).count(),
        Script::Latin => text.split_whitespace().count(),
    }
}
