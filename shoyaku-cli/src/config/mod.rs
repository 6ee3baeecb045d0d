//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoyaku_core::AnalysisConfig;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extraction limits and sentence bounds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
///
/// Unset fields leave the `[analysis]` values untouched.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Analyze chapters on a worker pool
    pub parallel_chapters: Option<bool>,

    /// Number of worker threads (0 = auto)
    pub worker_threads: Option<usize>,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Analysis configuration with the performance section applied
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = self.analysis.clone();
        if let Some(parallel) = self.performance.parallel_chapters {
            config.parallel_chapters = parallel;
        }
        if let Some(threads) = self.performance.worker_threads {
            config.threads = (threads > 0).then_some(threads);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.analysis_config().threads, None);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[analysis]
max_themes = 4
brief_sentences = 1

[output]
default_format = "json"

[performance]
parallel_chapters = false
worker_threads = 3
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);

        let analysis = config.analysis_config();
        assert_eq!(analysis.max_themes, 4);
        assert_eq!(analysis.brief_sentences, 1);
        assert_eq!(analysis.max_key_points, 10);
        assert!(!analysis.parallel_chapters);
        assert_eq!(analysis.threads, Some(3));
    }

    #[test]
    fn test_analysis_section_threading_kept() {
        let config: CliConfig =
            toml::from_str("[analysis]\nthreads = 4\nparallel_chapters = false").unwrap();

        let analysis = config.analysis_config();
        assert_eq!(analysis.threads, Some(4));
        assert!(!analysis.parallel_chapters);
    }

    #[test]
    fn test_performance_section_overrides_analysis() {
        let config: CliConfig = toml::from_str(
            "[analysis]\nthreads = 4\nparallel_chapters = false\n\n[performance]\nworker_threads = 0\nparallel_chapters = true",
        )
        .unwrap();

        let analysis = config.analysis_config();
        assert_eq!(analysis.threads, None);
        assert!(analysis.parallel_chapters);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[analysis]\nmax_themes = \"many\"").unwrap();

        let error = CliConfig::from_file(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_missing_file() {
        let error = CliConfig::from_file(Path::new("/no/such/shoyaku.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }
}
