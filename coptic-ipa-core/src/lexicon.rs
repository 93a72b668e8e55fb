//! Loan-word lexicon
//!
//! Maps a normalized word to the language it was borrowed from. The bundled
//! list is compiled in; an external list can be loaded from disk. Either way
//! the result is an immutable snapshot, usually shared behind an `Arc`.

use crate::error::{PhoneticError, Result};
use crate::origin::Language;
use crate::script::strip_diacritics;
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_LEXICON: &str = include_str!("../data/loanwords.tsv");

/// Language assigned to a line that names no language
pub const DEFAULT_LANGUAGE: Language = Language::Greek;

/// Normalized word → origin language
#[derive(Debug, Clone, Default)]
pub struct LoanLexicon {
    entries: HashMap<String, Language>,
}

impl LoanLexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The list compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_LEXICON)
    }

    /// Parse `word<TAB>Language` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line without a
    /// tab is a bare word with [`DEFAULT_LANGUAGE`]. The first occurrence of a
    /// word wins.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, language) = match line.split_once('\t') {
                Some((word, name)) => {
                    let name = name.trim();
                    let language = Language::from_name(name).ok_or_else(|| {
                        PhoneticError::MalformedLexicon {
                            line: idx + 1,
                            reason: format!("unknown language '{name}'"),
                        }
                    })?;
                    (word.trim(), language)
                }
                None => (line, DEFAULT_LANGUAGE),
            };

            if word.is_empty() {
                return Err(PhoneticError::MalformedLexicon {
                    line: idx + 1,
                    reason: "empty word".to_string(),
                });
            }

            entries.entry(strip_diacritics(word)).or_insert(language);
        }

        Ok(Self { entries })
    }

    /// Read and parse a lexicon file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PhoneticError::LexiconIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Origin of `word`, matched without diacritics or case.
    pub fn get(&self, word: &str) -> Option<Language> {
        self.entries.get(&strip_diacritics(word)).copied()
    }

    /// Lookup for an already-normalized key
    pub(crate) fn get_normalized(&self, key: &str) -> Option<Language> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
