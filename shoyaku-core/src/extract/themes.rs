//! Theme extraction from term frequencies

use crate::frequency::FrequencyTable;
use crate::lexicon::Lexicon;
use crate::script::Script;

/// The `limit` most frequent countable terms of `text`.
///
/// Latin terms come back capitalized; CJK terms are returned as written.
pub fn extract_themes(text: &str, limit: usize, lexicon: &Lexicon) -> Vec<String> {
    let script = Script::detect(text);
    let table = FrequencyTable::build(text, script, lexicon);

    table
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(term, _)| match script {
            Script::Latin => capitalize(term),
            Script::Cjk => term.to_string(),
        })
        .collect()
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
