//! Transcribe command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, SsmlFormatter, TextFormatter, Transcription};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use coptic_ipa_core::{
    AnalyzeOptions, Analyzer, Dialect, DisplayLanguage, KnownWords, LoanLexicon, Respeller,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the transcribe command
#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Transcribe this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pronunciation dialect: greco-bohairic, old-bohairic or greek
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Option<Dialect>,

    /// Respell in a display language (en, ar) instead of IPA
    #[arg(long, value_name = "LANGUAGE")]
    pub respell: Option<DisplayLanguage>,

    /// Do not read or fill the word cache
    #[arg(long)]
    pub no_cache: bool,

    /// Do not strip grammatical prefixes
    #[arg(long)]
    pub no_prefixes: bool,

    /// Loan-word lexicon (word<TAB>language) replacing the bundled one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Known-pronunciation tables replacing the bundled ones
    #[arg(short, long, value_name = "FILE")]
    pub known_words: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The input text with each word replaced by its IPA
    Text,
    /// JSON array of transcribed words with syllables
    Json,
    /// SSML document with IPA phoneme tags
    Ssml,
}

impl TranscribeArgs {
    /// Execute the transcribe command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting transcription");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let dialect = self.resolve_dialect(&config)?;
        let format = self.resolve_format(&config)?;
        let options = AnalyzeOptions {
            use_cache: config.transcription.use_cache && !self.no_cache,
            check_prefixes: config.transcription.check_prefixes && !self.no_prefixes,
        };
        let analyzer = self.build_analyzer(dialect, &config)?;

        let transcriptions = match &self.text {
            Some(text) => vec![Transcription {
                source: None,
                dialect,
                words: analyzer.analyze_with(text, options),
            }],
            None if !self.input.is_empty() => {
                self.transcribe_files(&analyzer, options, &config)?
            }
            None => return Err(CliError::NoInput.into()),
        };

        let respeller = self
            .respell
            .map(Respeller::new)
            .transpose()
            .map_err(CliError::from)?;
        if respeller.is_some() && format == OutputFormat::Ssml {
            log::warn!("--respell has no effect on SSML output");
        }

        let writer = self.open_output()?;
        let headers = transcriptions.len() > 1;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(
                TextFormatter::new(writer, config.output.syllable_separator.as_str())
                    .with_respeller(respeller)
                    .with_headers(headers),
            ),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .with_respeller(respeller)
                    .with_pretty(config.output.pretty_json),
            ),
            OutputFormat::Ssml => Box::new(SsmlFormatter::new(writer)),
        };

        for transcription in &transcriptions {
            formatter.format_transcription(transcription)?;
        }
        formatter.finish()?;

        log::info!(
            "Transcribed {} input(s) in {} ({} cached words)",
            transcriptions.len(),
            dialect,
            analyzer.cache_len()
        );
        Ok(())
    }

    fn resolve_dialect(&self, config: &CliConfig) -> Result<Dialect> {
        match self.dialect {
            Some(dialect) => Ok(dialect),
            None => Ok(config
                .transcription
                .default_dialect
                .parse()
                .map_err(CliError::from)?),
        }
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
                .into()
            }),
        }
    }

    fn build_analyzer(&self, dialect: Dialect, config: &CliConfig) -> Result<Analyzer> {
        let mut builder = Analyzer::builder(dialect);

        if let Some(path) = self.lexicon.as_ref().or(config.transcription.lexicon.as_ref()) {
            let lexicon = LoanLexicon::from_path(path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
            log::info!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
            builder = builder.lexicon(Arc::new(lexicon));
        }

        if let Some(path) = self
            .known_words
            .as_ref()
            .or(config.transcription.known_words.as_ref())
        {
            let known = KnownWords::from_file(path)
                .with_context(|| format!("Failed to load known words: {}", path.display()))?;
            log::info!("Loaded {} known words from {}", known.len(), path.display());
            builder = builder.known_words(Arc::new(known));
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    fn transcribe_files(
        &self,
        analyzer: &Analyzer,
        options: AnalyzeOptions,
        config: &CliConfig,
    ) -> Result<Vec<Transcription>> {
        let files = resolve_patterns(&self.input)?;
        let threads = config.performance.threads();
        log::info!("Transcribing {} file(s) on {} thread(s)", files.len(), threads);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ProcessingError(format!("Failed to start workers: {e}")))?;

        let dialect = analyzer.dialect();
        let results = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let words = analyzer.analyze_with(&text, options);
                    let name = path.display().to_string();
                    log::debug!("Transcribed {} ({} tokens)", name, words.len());
                    progress.file_completed(&name);
                    Ok(Transcription {
                        source: Some(name),
                        dialect,
                        words,
                    })
                })
                .collect::<Result<Vec<_>>>()
        });

        progress.finish();
        results
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
