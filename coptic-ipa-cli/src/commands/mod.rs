//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use coptic_ipa_core::{Dialect, DisplayLanguage};

pub mod guess;
pub mod transcribe;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe Coptic or Greek text to syllabified IPA
    Transcribe(transcribe::TranscribeArgs),

    /// Guess the language of origin of words
    Guess(guess::GuessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a known-pronunciation table or a loan-word lexicon
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported dialects
    Dialects,

    /// List available output formats
    Formats,

    /// List respelling display languages
    Respellings,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transcribe(args) => args.execute(),
            Commands::Guess(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// Core diagnostics arrive through the `log` facade as well.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

impl ListCommands {
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Dialects => Dialect::ALL
                .iter()
                .map(|d| format!("{:<16}{}", d.code(), d.name()))
                .collect(),
            ListCommands::Formats => [
                ("text", "Input text with each word replaced by its IPA"),
                ("json", "JSON array of transcribed words with syllables"),
                ("ssml", "SSML <speak> document with IPA phoneme tags"),
            ]
            .iter()
            .map(|(code, desc)| format!("{code:<16}{desc}"))
            .collect(),
            ListCommands::Respellings => DisplayLanguage::ALL
                .iter()
                .map(|l| format!("{:<16}{}", l.code(), l.name()))
                .collect(),
        }
    }
}
