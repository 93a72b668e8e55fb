//! Known-pronunciation tables
//!
//! Entries are authoritative: a word found here skips the rule pass and the
//! syllable algorithm entirely. They are parsed and validated once, when the
//! table is built, so a bad entry is a startup failure rather than a
//! per-word one.

use super::config::KnownWordsConfig;
use super::prefix::PrefixTrie;
use crate::error::{PhoneticError, Result};
use crate::phonetic::{PhoneticEquivalent, PhoneticWord};
use crate::script::{normalize_jenkim, to_lower};
use std::collections::HashMap;
use std::path::Path;

/// Whole-word and base pronunciation overrides plus the prefix list
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    with_prefix: HashMap<String, PhoneticWord>,
    base: HashMap<String, PhoneticWord>,
    prefixes: PrefixTrie,
}

impl KnownWords {
    /// Tables with no entries and no prefixes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a parsed configuration, validating every entry.
    pub fn from_config(config: &KnownWordsConfig) -> Result<Self> {
        let parse_all = |table: &std::collections::BTreeMap<String, String>| {
            table
                .iter()
                .map(|(word, entry)| {
                    let key = normalize_key(word);
                    parse_pronunciation(&key, entry).map(|w| (key, w))
                })
                .collect::<Result<HashMap<_, _>>>()
        };

        Ok(Self {
            with_prefix: parse_all(&config.with_prefix)?,
            base: parse_all(&config.base)?,
            prefixes: PrefixTrie::from_prefixes(&config.prefixes),
        })
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: KnownWordsConfig = toml::from_str(content).map_err(|e| {
            PhoneticError::ConfigurationError(format!("Failed to parse known words: {e}"))
        })?;
        Self::from_config(&config)
    }

    /// Load a TOML document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PhoneticError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Entry for a whole token, prefix included
    pub fn with_prefix(&self, key: &str) -> Option<&PhoneticWord> {
        self.with_prefix.get(key)
    }

    /// Entry for a base left after prefix stripping
    pub fn base(&self, key: &str) -> Option<&PhoneticWord> {
        self.base.get(key)
    }

    pub fn prefixes(&self) -> &PrefixTrie {
        &self.prefixes
    }

    /// Number of whole-token and base entries together
    pub fn len(&self) -> usize {
        self.with_prefix.len() + self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize_key(word: &str) -> String {
    word.chars().map(to_lower).collect()
}

/// Parse one `char,ipa;char,ipa|char,ipa` entry for `word`.
///
/// A `|` separator also records a syllable break before the next unit. The
/// unit characters must spell `word` once its jenkim marks are moved in front
/// of their letters.
pub fn parse_pronunciation(word: &str, entry: &str) -> Result<PhoneticWord> {
    let malformed = |reason: String| PhoneticError::MalformedKnownWord {
        word: word.to_string(),
        reason,
    };

    let mut units = Vec::new();
    let mut breaks = Vec::new();
    let mut rest = entry;

    loop {
        let (segment, separator, tail) = match rest.find([';', '|']) {
            Some(i) => (&rest[..i], rest[i..].chars().next(), &rest[i + 1..]),
            None => (rest, None, ""),
        };

        let (source, ipa) = segment
            .split_once(',')
            .ok_or_else(|| malformed(format!("unit '{segment}' is missing ','")))?;
        let source = source.trim();
        let mut chars = source.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(malformed(format!(
                    "unit '{segment}' must name exactly one character"
                )))
            }
        };
        units.push(PhoneticEquivalent::new(to_lower(ch), ipa.trim()));

        match separator {
            Some('|') => breaks.push(units.len()),
            Some(_) => {}
            None => break,
        }
        rest = tail;
    }

    let expected = normalize_jenkim(&word.chars().map(to_lower).collect::<Vec<_>>());
    let actual: Vec<char> = units.iter().map(|u| u.source).collect();
    if expected != actual {
        return Err(malformed(format!(
            "units spell '{}' but the key is '{}'",
            actual.iter().collect::<String>(),
            expected.iter().collect::<String>()
        )));
    }

    PhoneticWord::with_breaks(units, breaks).map_err(|e| malformed(e.to_string()))
}
