//! Term frequency tables

use crate::lexicon::Lexicon;
use crate::script::Script;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// Occurrence counts of the terms in one text span.
///
/// Immutable once built. Iteration yields terms in the order they were first
/// seen, which is what ranking falls back on when counts tie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Count the countable tokens of `text`
    pub fn build(text: &str, script: Script, lexicon: &Lexicon) -> Self {
        Self::from_tokens(tokenize(text, script), lexicon)
    }

    /// Count the countable terms of an arbitrary token stream
    pub fn from_tokens<I>(tokens: I, lexicon: &Lexicon) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        tokens
            .into_iter()
            .filter(|token| lexicon.is_countable(token))
            .collect()
    }

    fn increment(&mut self, term: String) {
        match self.index.get(&term) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(term.clone(), self.entries.len());
                self.entries.push((term, 1));
            }
        }
    }

    /// Occurrences of `term`, 0 when absent
    #[inline]
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all terms
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Terms with counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
    }

    /// Terms sorted by descending count; ties keep first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Counts every term as given, without lexicon filtering
impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut table = Self::default();
        for term in iter {
            table.increment(term);
        }
        table
    }
}
