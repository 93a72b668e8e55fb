//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Transcription configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Transcription-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Dialect used when `--dialect` is absent
    pub default_dialect: String,

    /// Use the analyzer's word cache
    pub use_cache: bool,

    /// Strip grammatical prefixes before transcribing
    pub check_prefixes: bool,

    /// Loan-word lexicon replacing the bundled one
    pub lexicon: Option<PathBuf>,

    /// Known-pronunciation tables replacing the bundled ones
    pub known_words: Option<PathBuf>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            default_dialect: "greco-bohairic".to_string(),
            use_cache: true,
            check_prefixes: true,
            lexicon: None,
            known_words: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Separator placed between syllables in IPA output
    pub syllable_separator: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            syllable_separator: ".".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker count with `0` resolved to the number of CPUs
    pub fn threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
