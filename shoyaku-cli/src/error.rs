//! Error handling for the CLI application

use std::fmt;

/// User-facing CLI failures
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration or lexicon error
    ConfigError(String),
    /// Analysis setup error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<shoyaku_core::Error> for CliError {
    fn from(error: shoyaku_core::Error) -> Self {
        use shoyaku_core::Error;

        match error {
            Error::Configuration(msg) => CliError::ConfigError(msg),
            Error::InvalidLexicon { .. }
            | Error::InvalidPattern { .. }
            | Error::Parse(_) => CliError::ConfigError(error.to_string()),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
