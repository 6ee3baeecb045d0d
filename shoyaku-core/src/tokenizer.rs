//! Script-aware tokenization
//!
//! Latin text is lowercased and split into runs of ASCII letters. CJK text has
//! no word delimiters, so it is cut wherever the character class changes
//! (kanji → kana, kana → katakana, and so on). Runs of kanji stay together.
//!
//! Both variants are lazy and cheap to clone; cloning a [`Tokens`] before
//! consuming it restarts the sequence from the same point.

use crate::script::{CharClass, Script};
use std::str::Split;

/// Lazy token sequence over a text span
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: TokensInner<'a>,
}

#[derive(Debug, Clone)]
enum TokensInner<'a> {
    Latin(LatinTokens),
    Cjk(CjkTokens<'a>),
}

/// Tokenize a span with the tokenizer matching its script
pub fn tokenize(text: &str, script: Script) -> Tokens<'_> {
    let inner = match script {
        Script::Latin => TokensInner::Latin(LatinTokens::new(text)),
        Script::Cjk => TokensInner::Cjk(CjkTokens::new(text)),
    };
    Tokens { inner }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.inner {
            TokensInner::Latin(tokens) => tokens.next(),
            TokensInner::Cjk(tokens) => tokens.next(),
        }
    }
}

/// Maximal runs of ASCII letters in the lowercased span
#[derive(Debug, Clone)]
pub struct LatinTokens {
    lowered: String,
    pos: usize,
}

impl LatinTokens {
    fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
            pos: 0,
        }
    }
}

impl Iterator for LatinTokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // ASCII bytes never occur inside a multi-byte sequence, so every
        // index we stop at is a char boundary.
        let bytes = self.lowered.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        Some(self.lowered[start..self.pos].to_string())
    }
}

/// Characters that separate CJK chunks before the class walk
#[inline]
pub fn is_cjk_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '、' | '。' | '！' | '？' | '，' | '．' | '､' | '｡')
}

/// Class-transition runs inside delimiter-separated chunks
#[derive(Debug, Clone)]
pub struct CjkTokens<'a> {
    chunks: Split<'a, fn(char) -> bool>,
    current: &'a str,
}

impl<'a> CjkTokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chunks: text.split(is_cjk_delimiter as fn(char) -> bool),
            current: "",
        }
    }
}

impl Iterator for CjkTokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.current.is_empty() {
            self.current = self.chunks.next()?;
        }

        let mut chars = self.current.char_indices();
        let (_, first) = chars.next()?;
        let class = CharClass::of(first);
        let end = chars
            .find(|&(_, ch)| CharClass::of(ch) != class)
            .map_or(self.current.len(), |(idx, _)| idx);

        let (token, rest) = self.current.split_at(end);
        self.current = rest;
        Some(token.to_string())
    }
}
