//! JSON output formatter

use super::{OutputFormatter, Transcription};
use anyhow::Result;
use coptic_ipa_core::{PhoneticWord, Respeller};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter: collects every transcription and writes one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    respeller: Option<Respeller>,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// One transcribed input
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file, absent for inline text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Dialect code
    pub dialect: String,
    /// Lexical words in order; separators are dropped
    pub words: Vec<WordData>,
}

/// One analyzed word
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// Source text with its casing
    pub text: String,
    /// IPA with `.` between syllables
    pub ipa: String,
    /// IPA of each syllable
    pub syllables: Vec<String>,
    /// Display-language respelling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respelling: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            respeller: None,
            pretty: true,
            documents: Vec::new(),
        }
    }

    pub fn with_respeller(mut self, respeller: Option<Respeller>) -> Self {
        self.respeller = respeller;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn word_data(&self, word: &PhoneticWord) -> WordData {
        WordData {
            text: word.source_text(),
            ipa: word.ipa_syllabified("."),
            syllables: word
                .syllables()
                .into_iter()
                .map(|s| s.ipa)
                .filter(|ipa| !ipa.is_empty())
                .collect(),
            respelling: self.respeller.as_ref().map(|r| r.respell_word(word)),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        let words = transcription
            .words
            .iter()
            .filter(|w| w.is_lexical())
            .map(|w| self.word_data(w))
            .collect();

        self.documents.push(DocumentData {
            source: transcription.source.clone(),
            dialect: transcription.dialect.code().to_string(),
            words,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
