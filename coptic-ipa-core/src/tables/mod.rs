//! Static tables: dialect letter tables, known pronunciations, prefixes and
//! respelling tables.

pub mod config;
pub mod known;
pub mod loader;
pub mod prefix;

pub use config::{DialectConfig, KnownWordsConfig, Metadata, RespellingConfig};
pub use known::{parse_pronunciation, KnownWords};
pub use loader::{
    list_dialect_tables, list_respelling_tables, load_dialect_config, load_known_words,
    load_respelling_config,
};
pub use prefix::PrefixTrie;

use crate::error::{PhoneticError, Result};
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;

/// Per-character default transcription for one dialect
#[derive(Debug, Clone, Default)]
pub struct TranscriptionTable {
    letters: HashMap<char, String>,
}

impl TranscriptionTable {
    /// Build from a validated dialect config.
    pub fn from_config(config: &DialectConfig) -> Result<Self> {
        config.validate()?;
        let mut letters = HashMap::with_capacity(config.letters.len());
        for (key, ipa) in &config.letters {
            let ch = key.chars().next().ok_or_else(|| {
                PhoneticError::ConfigurationError("empty letter key".to_string())
            })?;
            letters.insert(ch, ipa.clone());
        }
        Ok(Self { letters })
    }

    /// IPA for `ch`, if the table defines it
    pub fn get(&self, ch: char) -> Option<&str> {
        self.letters.get(&ch).map(String::as_str)
    }

    /// IPA for `ch`, falling back to the character itself.
    ///
    /// Combining marks the table does not define are silent.
    pub fn transcribe(&self, ch: char) -> String {
        match self.get(ch) {
            Some(ipa) => ipa.to_string(),
            None if is_combining_mark(ch) => String::new(),
            None => ch.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
