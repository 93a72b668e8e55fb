//! Dialects and their letter-context rule passes
//!
//! A [`Dialect`] picks a default letter table and a rule pass. The pipeline
//! and the syllable algorithm are shared; only the pass that rewrites each
//! unit's IPA from its neighbours differs.

mod greco_bohairic;
pub mod greek;
mod old_bohairic;

use crate::error::PhoneticError;
use crate::origin::Language;
use crate::phonetic::PhoneticEquivalent;
use crate::script::ipa_starts_with_front_vowel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported pronunciation dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Reformed liturgical pronunciation
    #[default]
    GrecoBohairic,
    /// Reconstructed pre-reform pronunciation
    OldBohairic,
    /// Greek-script input read with Greco-Bohairic rules
    Greek,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::GrecoBohairic, Dialect::OldBohairic, Dialect::Greek];

    pub fn code(&self) -> &'static str {
        match self {
            Dialect::GrecoBohairic => "greco-bohairic",
            Dialect::OldBohairic => "old-bohairic",
            Dialect::Greek => "greek",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::GrecoBohairic => "Greco-Bohairic",
            Dialect::OldBohairic => "Old Bohairic",
            Dialect::Greek => "Greek",
        }
    }

    /// Code of the bundled letter table this dialect transcribes with
    pub(crate) fn table_code(&self) -> &'static str {
        match self {
            Dialect::GrecoBohairic | Dialect::Greek => "greco-bohairic",
            Dialect::OldBohairic => "old-bohairic",
        }
    }

    /// Whether the rule pass reads the word's origin
    pub(crate) fn uses_origin(&self) -> bool {
        matches!(self, Dialect::GrecoBohairic | Dialect::Greek)
    }

    /// Rewrite the IPA of `units` from their context.
    ///
    /// Units must hold the default table IPA and be jenkim-normalized.
    pub(crate) fn apply_rules(&self, units: &mut [PhoneticEquivalent], origin: Language) {
        match self {
            Dialect::GrecoBohairic => greco_bohairic::apply(units, origin),
            // Greek script with no other evidence reads as a Greek word
            Dialect::Greek => match origin {
                Language::Unknown => greco_bohairic::apply(units, Language::Greek),
                known => greco_bohairic::apply(units, known),
            },
            Dialect::OldBohairic => old_bohairic::apply(units),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "greco-bohairic" | "gb" => Ok(Dialect::GrecoBohairic),
            "old-bohairic" | "ob" => Ok(Dialect::OldBohairic),
            "greek" | "el" => Ok(Dialect::Greek),
            _ => Err(PhoneticError::UnsupportedDialect(s.to_string())),
        }
    }
}

/// Lower-case source of the unit at `idx`, if any
fn source_at(units: &[PhoneticEquivalent], idx: Option<usize>) -> Option<char> {
    idx.and_then(|i| units.get(i)).map(|u| u.source)
}

/// Source characters around position `c`
#[derive(Debug, Clone, Copy)]
struct Neighbours {
    prev2: Option<char>,
    prev: Option<char>,
    next: Option<char>,
}

impl Neighbours {
    fn at(units: &[PhoneticEquivalent], c: usize) -> Self {
        Self {
            prev2: source_at(units, c.checked_sub(2)),
            prev: source_at(units, c.checked_sub(1)),
            next: source_at(units, Some(c + 1)),
        }
    }
}

/// ⲅ assimilates to the sound after it; `None` keeps the table value.
fn gamma_before(next: Option<&PhoneticEquivalent>) -> Option<&'static str> {
    let ipa = next.map(|u| u.ipa.as_str())?;
    if ipa_starts_with_front_vowel(ipa) {
        Some("g")
    } else if ipa.starts_with(['g', 'k']) {
        Some("ŋ")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_codes_names_and_aliases() {
        assert_eq!("greco-bohairic".parse::<Dialect>().unwrap(), Dialect::GrecoBohairic);
        assert_eq!("Old Bohairic".parse::<Dialect>().unwrap(), Dialect::OldBohairic);
        assert_eq!("old_bohairic".parse::<Dialect>().unwrap(), Dialect::OldBohairic);
        assert_eq!("GB".parse::<Dialect>().unwrap(), Dialect::GrecoBohairic);
        assert_eq!("el".parse::<Dialect>().unwrap(), Dialect::Greek);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        match "sahidic".parse::<Dialect>() {
            Err(PhoneticError::UnsupportedDialect(name)) => assert_eq!(name, "sahidic"),
            other => panic!("Expected UnsupportedDialect, got {:?}", other),
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.code().parse::<Dialect>().unwrap(), dialect);
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Dialect::OldBohairic).unwrap();
        assert_eq!(json, "\"old-bohairic\"");
        let back: Dialect = serde_json::from_str("\"greco-bohairic\"").unwrap();
        assert_eq!(back, Dialect::GrecoBohairic);
    }
}
