//! SSML output formatter

use super::{OutputFormatter, Transcription};
use anyhow::Result;
use coptic_ipa_core::render_ssml;
use std::io::Write;

/// SSML formatter: one `<speak>` document per line
pub struct SsmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> SsmlFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for SsmlFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        let document = render_ssml(&transcription.words, Some(transcription.lang_tag()));
        writeln!(self.writer, "{document}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
