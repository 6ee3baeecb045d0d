//! Error types for configuration and lexicon loading
//!
//! Analysis itself never fails: degenerate input produces empty results.
//! Only building an [`Analyzer`](crate::Analyzer) and loading lexicon tables
//! can go wrong.

use thiserror::Error;

/// Error type for engine setup
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A lexicon table is structurally invalid
    #[error("Invalid lexicon '{code}': {reason}")]
    InvalidLexicon {
        /// Language code of the offending lexicon
        code: String,
        /// What is wrong with it
        reason: String,
    },

    /// A lead-in or topic pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the lexicon
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Lexicon TOML could not be parsed
    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error while reading a lexicon file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine setup
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("threads must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: threads must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_lexicon_display() {
        let error = Error::InvalidLexicon {
            code: "ja".to_string(),
            reason: "no stopwords defined".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid lexicon 'ja': no stopwords defined"
        );
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let error = Error::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid pattern '(unclosed'"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing.toml"));
    }
}
