//! Respelling IPA in a display language's script
//!
//! Readers who do not know IPA get an approximate spelling built from
//! per-language token tables. Each syllable is respelled by greedy
//! longest match and syllables are joined with `-`.

use crate::error::{PhoneticError, Result};
use crate::phonetic::PhoneticWord;
use crate::tables::{load_respelling_config, RespellingConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Syllable separator in respelled words
pub const SYLLABLE_SEPARATOR: &str = "-";

/// Languages with a bundled respelling table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    English,
    Arabic,
}

impl DisplayLanguage {
    pub const ALL: [DisplayLanguage; 2] = [DisplayLanguage::English, DisplayLanguage::Arabic];

    pub fn code(&self) -> &'static str {
        match self {
            DisplayLanguage::English => "en",
            DisplayLanguage::Arabic => "ar",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayLanguage::English => "English",
            DisplayLanguage::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DisplayLanguage {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(DisplayLanguage::English),
            "ar" | "arabic" => Ok(DisplayLanguage::Arabic),
            _ => Err(PhoneticError::ConfigurationError(format!(
                "Unsupported respelling language: {s}"
            ))),
        }
    }
}

/// IPA → display-language speller
#[derive(Debug, Clone)]
pub struct Respeller {
    language: DisplayLanguage,
    tokens: HashMap<String, String>,
    /// Length in chars of the longest token
    longest: usize,
}

impl Respeller {
    /// Speller using the bundled table.
    pub fn new(language: DisplayLanguage) -> Result<Self> {
        let config = load_respelling_config(language.code())?;
        Self::from_config(language, &config)
    }

    pub fn from_config(language: DisplayLanguage, config: &RespellingConfig) -> Result<Self> {
        config.validate()?;
        let longest = config
            .tokens
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Ok(Self {
            language,
            tokens: config.tokens.clone(),
            longest,
        })
    }

    pub fn language(&self) -> DisplayLanguage {
        self.language
    }

    /// Respell an IPA string. Unknown symbols pass through.
    pub fn respell_ipa(&self, ipa: &str) -> String {
        let chars: Vec<char> = ipa.chars().collect();
        let mut out = String::with_capacity(ipa.len());
        let mut i = 0;

        while i < chars.len() {
            let max = self.longest.min(chars.len() - i);
            let matched = (1..=max).rev().find_map(|len| {
                let candidate: String = chars[i..i + len].iter().collect();
                self.tokens.get(&candidate).map(|spelling| (len, spelling))
            });

            match matched {
                Some((len, spelling)) => {
                    out.push_str(spelling);
                    i += len;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }

        out
    }

    /// Respell a word syllable by syllable.
    pub fn respell_word(&self, word: &PhoneticWord) -> String {
        if !word.is_lexical() {
            return word.source_text();
        }
        word.syllables()
            .iter()
            .filter(|s| !s.ipa.is_empty())
            .map(|s| self.respell_ipa(&s.ipa))
            .collect::<Vec<_>>()
            .join(SYLLABLE_SEPARATOR)
    }

    /// Respell analyzed text, keeping separators.
    pub fn respell_text(&self, words: &[PhoneticWord]) -> String {
        words.iter().map(|w| self.respell_word(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::PhoneticEquivalent;

    fn amen() -> PhoneticWord {
        PhoneticWord::with_breaks(
            vec![
                PhoneticEquivalent::new('ⲁ', "ɑ"),
                PhoneticEquivalent::new('ⲙ', "m"),
                PhoneticEquivalent::new('ⲏ', "iː"),
                PhoneticEquivalent::new('ⲛ', "n"),
            ],
            [1],
        )
        .unwrap()
    }

    #[test]
    fn test_longest_match() {
        let speller = Respeller::new(DisplayLanguage::English).unwrap();
        assert_eq!(speller.respell_ipa("miːn"), "meen");
        assert_eq!(speller.respell_ipa("tʃo"), "cho");
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        let speller = Respeller::new(DisplayLanguage::English).unwrap();
        assert_eq!(speller.respell_ipa("ʔ"), "ʔ");
        assert_eq!(speller.respell_ipa(""), "");
    }

    #[test]
    fn test_word_and_text() {
        let speller = Respeller::new(DisplayLanguage::English).unwrap();
        assert_eq!(speller.respell_word(&amen()), "a-meen");
        let words = vec![amen(), PhoneticWord::literal(", "), amen()];
        assert_eq!(speller.respell_text(&words), "a-meen, a-meen");
    }

    #[test]
    fn test_every_language_loads() {
        for language in DisplayLanguage::ALL {
            let speller = Respeller::new(language).unwrap();
            assert_eq!(speller.language(), language);
            assert!(!speller.respell_word(&amen()).is_empty());
        }
    }

    #[test]
    fn test_parse_display_language() {
        assert_eq!("english".parse::<DisplayLanguage>().unwrap(), DisplayLanguage::English);
        assert_eq!("AR".parse::<DisplayLanguage>().unwrap(), DisplayLanguage::Arabic);
        assert!("french".parse::<DisplayLanguage>().is_err());
    }
}
