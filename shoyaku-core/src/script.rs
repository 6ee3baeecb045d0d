//! Script classification
//!
//! Every span of text is analyzed either as Latin-alphabet text or as CJK
//! text. The decision is made once per span by [`Script::detect`] and passed
//! explicitly to the tokenizer, the scorer and the word counter.

use std::fmt;

/// Classification of a single character for CJK segmentation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// U+3040..=U+309F
    Hiragana,
    /// U+30A0..=U+30FF
    Katakana,
    /// CJK unified ideographs, U+4E00..=U+9FAF
    Han,
    /// Anything else (Latin letters, digits, punctuation, symbols)
    Other,
}

impl CharClass {
    /// Classify a character
    #[inline]
    pub fn of(ch: char) -> Self {
        match ch {
            '\u{3040}'..='\u{309F}' => CharClass::Hiragana,
            '\u{30A0}'..='\u{30FF}' => CharClass::Katakana,
            '\u{4E00}'..='\u{9FAF}' => CharClass::Han,
            _ => CharClass::Other,
        }
    }

    /// True for Hiragana, Katakana and Han
    #[inline]
    pub fn is_cjk(self) -> bool {
        !matches!(self, CharClass::Other)
    }
}

/// Script of a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Whitespace-delimited alphabetic text
    #[default]
    Latin,
    /// Japanese/Chinese text without word delimiters
    Cjk,
}

impl Script {
    /// Detect the script of a span.
    ///
    /// A single Hiragana, Katakana or Han character is enough to make the
    /// whole span CJK.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|ch| CharClass::of(ch).is_cjk()) {
            Script::Cjk
        } else {
            Script::Latin
        }
    }

    /// Short identifier
    pub fn code(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cjk => "cjk",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
