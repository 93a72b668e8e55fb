//! Guess command implementation

use super::init_logging;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use coptic_ipa_core::{guess_word_language, LanguageGuess, LoanLexicon};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the guess command
#[derive(Debug, Args)]
pub struct GuessArgs {
    /// Words to classify
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Loan-word lexicon (word<TAB>language) replacing the bundled one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: GuessFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats for origin guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GuessFormat {
    /// One tab-separated line per word
    Text,
    /// JSON array of guesses
    Json,
}

#[derive(Debug, Serialize)]
struct GuessData<'a> {
    word: &'a str,
    language: &'static str,
    confidence: f32,
}

impl GuessArgs {
    /// Execute the guess command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let lexicon = match &self.lexicon {
            Some(path) => LoanLexicon::from_path(path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?,
            None => LoanLexicon::bundled()?,
        };
        log::debug!("Guessing {} word(s) against {} lexicon entries", self.words.len(), lexicon.len());

        let guesses: Vec<(&str, LanguageGuess)> = self
            .words
            .iter()
            .map(|w| (w.as_str(), guess_word_language(w, &lexicon)))
            .collect();

        let stdout = io::stdout();
        self.write(&mut stdout.lock(), &guesses)
    }

    fn write(&self, writer: &mut impl Write, guesses: &[(&str, LanguageGuess)]) -> Result<()> {
        match self.format {
            GuessFormat::Text => {
                for (word, guess) in guesses {
                    writeln!(
                        writer,
                        "{word}\t{}\t{:.2}",
                        guess.language.name(),
                        guess.confidence
                    )?;
                }
            }
            GuessFormat::Json => {
                let data: Vec<GuessData> = guesses
                    .iter()
                    .map(|(word, guess)| GuessData {
                        word: *word,
                        language: guess.language.name(),
                        confidence: guess.confidence,
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *writer, &data)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
