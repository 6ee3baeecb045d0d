//! TOML schema for lexicon tables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub stopwords: Stopwords,
    #[serde(default)]
    pub key_points: KeyPoints,
    #[serde(default)]
    pub topics: Topics,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Function words excluded from frequency counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stopwords {
    #[serde(default)]
    pub words: Vec<String>,
}

/// Sentence lead-ins that mark a key point
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyPoints {
    /// Case-insensitive regular expressions
    #[serde(default)]
    pub lead_ins: Vec<String>,
}

/// Capitalized phrases never reported as topics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topics {
    #[serde(default)]
    pub denylist: Vec<String>,
}

impl LexiconConfig {
    /// Parse a lexicon from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded lexicon file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(self.invalid("metadata.code must not be empty"));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(self.invalid("metadata.name must not be empty"));
        }

        if self.stopwords.words.is_empty()
            && self.key_points.lead_ins.is_empty()
            && self.topics.denylist.is_empty()
        {
            return Err(self.invalid("no stopwords, lead-ins or topic denylist entries defined"));
        }

        if let Some(word) = self.stopwords.words.iter().find(|w| w.trim().is_empty()) {
            return Err(self.invalid(&format!("blank stopword entry {word:?}")));
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidLexicon {
            code: self.metadata.code.clone(),
            reason: reason.to_string(),
        }
    }
}
