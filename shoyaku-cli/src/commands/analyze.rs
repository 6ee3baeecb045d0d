//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use shoyaku_core::lexicon::with_extra;
use shoyaku_core::{AnalysisConfig, Analyzer, Lexicon, LexiconConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional lexicon files merged into the builtin lexicon
    #[arg(long, value_name = "FILE")]
    pub lexicon: Vec<PathBuf>,

    /// Number of worker threads for chapter analysis
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Analyze chapters on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Readable report per input file
    Text,
    /// JSON array of analysis results
    Json,
}

impl OutputFormat {
    fn from_config_name(name: &str) -> Result<Self, CliError> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting document analysis");
        log::debug!("Arguments: {self:?}");

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let analyzer = self.build_analyzer(&cli_config)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to analyze", files.len());

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config_name(&cli_config.output.default_format)?,
        };

        // Every input must load before the output file is created
        let documents = files
            .iter()
            .map(|file| FileReader::read_document(file).map(|document| (file, document)))
            .collect::<Result<Vec<_>>>()?;

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        for (file, document) in &documents {
            let content = analyzer.process_content(document);
            let source = file.display().to_string();
            formatter.format_result(&source, &content)?;
            progress.file_completed(&source);
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Analysis complete");

        Ok(())
    }

    /// Build the analyzer from the config file, flags and lexicons
    fn build_analyzer(&self, cli_config: &CliConfig) -> Result<Analyzer> {
        let config = self.analysis_config(cli_config);
        if config.parallel_chapters {
            log::info!(
                "Analyzing chapters on {} threads",
                config.threads.unwrap_or_else(num_cpus::get)
            );
        }

        let lexicon = self.load_lexicon()?;
        let analyzer = Analyzer::with_lexicon(config, lexicon).map_err(CliError::from)?;
        Ok(analyzer)
    }

    fn analysis_config(&self, cli_config: &CliConfig) -> AnalysisConfig {
        let mut config = cli_config.analysis_config();
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if self.sequential {
            config.parallel_chapters = false;
        }
        config
    }

    fn load_lexicon(&self) -> Result<Arc<Lexicon>> {
        if self.lexicon.is_empty() {
            return Ok(Lexicon::builtin());
        }

        let extra = self
            .lexicon
            .iter()
            .map(|path| {
                LexiconConfig::from_file(path)
                    .map_err(CliError::from)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        let lexicon = with_extra(&extra).map_err(CliError::from)?;
        log::info!("Loaded lexicons: {}", lexicon.languages().join(", "));
        Ok(Arc::new(lexicon))
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
