//! Validate command implementation

use anyhow::Result;
use clap::Args;
use coptic_ipa_core::{KnownWords, LoanLexicon};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Known-pronunciation TOML file to validate
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "lexicon"
    )]
    pub known_words: Option<PathBuf>,

    /// Loan-word lexicon TSV file to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut failed = None;

        if let Some(path) = &self.known_words {
            println!("Validating known pronunciations: {}", path.display());
            match KnownWords::from_file(path) {
                Ok(known) => {
                    println!("✓ Known pronunciations are valid!");
                    println!("  Entries: {}", known.len());
                    println!("  Prefixes: {}", known.prefixes().len());
                }
                Err(e) => {
                    println!("✗ Known pronunciations are invalid!");
                    println!("  Error: {e}");
                    failed = Some(e);
                }
            }
        }

        if let Some(path) = &self.lexicon {
            println!("Validating lexicon: {}", path.display());
            match LoanLexicon::from_path(path) {
                Ok(lexicon) => {
                    println!("✓ Lexicon is valid!");
                    println!("  Entries: {}", lexicon.len());
                }
                Err(e) => {
                    println!("✗ Lexicon is invalid!");
                    println!("  Error: {e}");
                    failed = failed.or(Some(e));
                }
            }
        }

        match failed {
            Some(e) => Err(anyhow::anyhow!("Validation failed: {}", e)),
            None => Ok(()),
        }
    }
}
