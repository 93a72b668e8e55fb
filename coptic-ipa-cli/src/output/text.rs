//! Plain text output formatter

use super::{OutputFormatter, Transcription};
use anyhow::Result;
use coptic_ipa_core::{ipa_text, Respeller};
use std::io::Write;

/// Plain text formatter: the input with every word replaced by its IPA,
/// or by its respelling when a respeller is set.
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
    respeller: Option<Respeller>,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            respeller: None,
            headers: false,
        }
    }

    /// Respell instead of printing IPA
    pub fn with_respeller(mut self, respeller: Option<Respeller>) -> Self {
        self.respeller = respeller;
        self
    }

    /// Print a `==> file <==` header before each file
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        if self.headers {
            if let Some(source) = &transcription.source {
                writeln!(self.writer, "==> {source} <==")?;
            }
        }

        let text = match &self.respeller {
            Some(respeller) => respeller.respell_text(&transcription.words),
            None => ipa_text(&transcription.words, &self.separator),
        };
        write!(self.writer, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
