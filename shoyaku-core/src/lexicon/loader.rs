//! Embedded lexicon tables
//!
//! The English and Japanese tables are compiled into the binary and parsed
//! once on first use.

use super::{config::LexiconConfig, Lexicon};
use crate::error::{Error, Result};
use std::sync::{Arc, OnceLock};

static BUILTIN: OnceLock<Arc<Lexicon>> = OnceLock::new();

macro_rules! embed_lexicon {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Parse the embedded lexicon tables
pub fn builtin_configs() -> Result<Vec<LexiconConfig>> {
    let embedded = [
        embed_lexicon!("en", "../../configs/lexicon/english.toml"),
        embed_lexicon!("ja", "../../configs/lexicon/japanese.toml"),
    ];

    embedded
        .into_iter()
        .map(|(code, toml_content)| {
            let config = LexiconConfig::from_toml_str(toml_content)?;
            if config.metadata.code != code {
                return Err(Error::InvalidLexicon {
                    code: code.to_string(),
                    reason: format!("embedded table declares code {}", config.metadata.code),
                });
            }
            Ok(config)
        })
        .collect()
}

/// Shared lexicon built from the embedded tables
pub fn builtin() -> Arc<Lexicon> {
    BUILTIN
        .get_or_init(|| {
            let configs = builtin_configs().expect("Failed to load embedded lexicon tables");
            let lexicon =
                Lexicon::from_configs(&configs).expect("Embedded lexicon tables must compile");
            log::debug!(
                "Initialized builtin lexicon: {} stopwords, {} lead-ins",
                lexicon.stopword_count(),
                lexicon.lead_in_count()
            );
            Arc::new(lexicon)
        })
        .clone()
}

/// Builtin tables extended with additional ones
pub fn with_extra(extra: &[LexiconConfig]) -> Result<Lexicon> {
    let mut configs = builtin_configs()?;
    configs.extend_from_slice(extra);
    Lexicon::from_configs(&configs)
}
