//! Summarize command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{create_formatter, DocumentSummary, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use precis_core::{Config, LanguageResources, Summarizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fraction of sentences to keep, in (0, 1] [default: 0.3]
    #[arg(short, long, value_name = "RATIO")]
    pub ratio: Option<f64>,

    /// Maximum number of summary sentences [default: 5]
    #[arg(short, long, value_name = "COUNT")]
    pub max_sentences: Option<usize>,

    /// External language resource file (TOML)
    #[arg(long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Append statistics to text output
    #[arg(long)]
    pub stats: bool,

    /// Summarize documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel runs (default: all cores)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Reject inputs larger than this many KB (0 = unlimited)
    #[arg(long, value_name = "KB")]
    pub max_input_kb: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags over the config file
#[derive(Debug)]
struct RunSettings {
    format: OutputFormat,
    options: FormatOptions,
    parallel: bool,
    threads: usize,
    max_input_kb: u64,
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting summarization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let summarizer = self.build_summarizer(&config)?;
        let sources = resolve_inputs(&self.input)?;
        let settings = self.settings(&config, sources.len());

        log::info!("Summarizing {} document(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(sources.len() as u64);

        let documents = if settings.parallel && sources.len() > 1 {
            summarize_parallel(&summarizer, &sources, &settings, &progress)?
        } else {
            sources
                .iter()
                .map(|source| {
                    summarize_one(&summarizer, source, settings.max_input_kb, &progress)
                })
                .collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        self.write_output(&documents, &settings)
    }

    fn build_summarizer(&self, config: &CliConfig) -> Result<Summarizer> {
        let summary_config = Config::builder()
            .summary_ratio(self.ratio.unwrap_or(config.summary.ratio))
            .max_sentences(self.max_sentences.unwrap_or(config.summary.max_sentences))
            .weights(config.weights)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut builder = Summarizer::builder().config(summary_config);
        if let Some(path) = &self.resources {
            let resources = LanguageResources::from_file(path).with_context(|| {
                format!("Failed to load language resources: {}", path.display())
            })?;
            builder = builder.resources(resources);
        }

        Ok(builder.build()?)
    }

    fn settings(&self, config: &CliConfig, documents: usize) -> RunSettings {
        let threads = self
            .threads
            .or(Some(config.performance.threads).filter(|&t| t > 0))
            .unwrap_or_else(num_cpus::get);

        RunSettings {
            format: self.format.unwrap_or(config.output.format),
            options: FormatOptions {
                statistics: self.stats || config.output.statistics,
                pretty_json: config.output.pretty_json,
                show_source: documents > 1,
            },
            parallel: self.parallel || config.performance.parallel,
            threads,
            max_input_kb: self
                .max_input_kb
                .unwrap_or(config.performance.max_input_kb),
        }
    }

    fn write_output(&self, documents: &[DocumentSummary], settings: &RunSettings) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(settings.format, writer, settings.options);
        for document in documents {
            formatter.format_summary(document)?;
        }
        formatter.finish()
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
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn summarize_one(
    summarizer: &Summarizer,
    source: &InputSource,
    max_input_kb: u64,
    progress: &ProgressReporter,
) -> Result<DocumentSummary> {
    let name = source.to_string();
    let text = source.read(max_input_kb)?;
    let summary = summarizer.summarize(&text);

    log::info!(
        "{}: kept {} of {} sentences ({:.1}% compression)",
        name,
        summary.statistics.summary_sentences,
        summary.statistics.original_sentences,
        summary.statistics.compression_ratio
    );
    progress.document_completed(&name);

    Ok(DocumentSummary {
        source: name,
        summary,
    })
}

/// Summarize on a dedicated pool; results keep input order
fn summarize_parallel(
    summarizer: &Summarizer,
    sources: &[InputSource],
    settings: &RunSettings,
    progress: &ProgressReporter,
) -> Result<Vec<DocumentSummary>> {
    log::debug!("Using {} worker threads", settings.threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build()
        .context("Failed to build thread pool")?;

    pool.install(|| {
        sources
            .par_iter()
            .map(|source| summarize_one(summarizer, source, settings.max_input_kb, progress))
            .collect()
    })
}
