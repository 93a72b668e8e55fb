//! Output formatting module

use anyhow::Result;
use coptic_ipa_core::{Dialect, PhoneticWord};

/// One transcribed input: a file or the inline `--text`
#[derive(Debug, Clone)]
pub struct Transcription {
    /// File the text came from; `None` for inline text
    pub source: Option<String>,
    /// Dialect the text was read in
    pub dialect: Dialect,
    /// Analyzed words, separators included
    pub words: Vec<PhoneticWord>,
}

impl Transcription {
    /// `xml:lang` hint for speech output
    pub fn lang_tag(&self) -> &'static str {
        match self.dialect {
            Dialect::Greek => "el",
            _ => "cop",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one transcribed input
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod ssml;
pub mod text;

pub use json::JsonFormatter;
pub use ssml::SsmlFormatter;
pub use text::TextFormatter;
