//! Word-origin heuristic
//!
//! Loan words keep some of their source-language pronunciation, so the rule
//! pass asks where a word comes from before resolving letters such as ⲭ.

use crate::lexicon::LoanLexicon;
use crate::script::{strip_diacritics, COPTIC_EXCLUSIVE, GREEK_EXCLUSIVE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin languages known to the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Coptic,
    Greek,
    Latin,
    Hebrew,
    Aramaic,
    Arabic,
    #[default]
    Unknown,
}

impl Language {
    /// Parse a language name as written in lexicon files, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "coptic" => Some(Language::Coptic),
            "greek" => Some(Language::Greek),
            "latin" => Some(Language::Latin),
            "hebrew" => Some(Language::Hebrew),
            "aramaic" => Some(Language::Aramaic),
            "arabic" => Some(Language::Arabic),
            "unknown" => Some(Language::Unknown),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Coptic => "Coptic",
            Language::Greek => "Greek",
            Language::Latin => "Latin",
            Language::Hebrew => "Hebrew",
            Language::Aramaic => "Aramaic",
            Language::Arabic => "Arabic",
            Language::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A guessed origin with its confidence in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageGuess {
    pub language: Language,
    pub confidence: f32,
}

impl LanguageGuess {
    pub const fn new(language: Language, confidence: f32) -> Self {
        Self {
            language,
            confidence,
        }
    }

    pub const fn unknown() -> Self {
        Self::new(Language::Unknown, 0.0)
    }
}

/// Native word that would otherwise look Greek
const COPTIC_EXCEPTION: &str = "ⲁⲛⲍⲏⲃ";

const GREEK_PREFIXES: &[&str] = &[
    "ⲁⲣⲭ", "ⲉⲩ", "ⲡⲁⲛⲧ", "ⲡⲣⲟ", "ⲡⲁⲣⲁ", "ⲁⲛⲧⲓ", "ⲕⲁⲧⲁ", "ⲙⲉⲧⲁ", "ⲉⲡⲓ", "ⲥⲩⲛ", "ⲫⲓⲗ", "ⲑⲉⲟ",
];

const GREEK_SUFFIXES: &[&str] = &[
    "ⲟⲥ", "ⲟⲛ", "ⲓⲁ", "ⲏⲥ", "ⲓⲟⲛ", "ⲓⲕⲟⲛ", "ⲓⲥⲙⲟⲥ", "ⲱⲛ", "ⲓⲥ", "ⲉⲓⲁ",
];

/// Guess where `word` comes from.
///
/// The word is matched without diacritics and case. Rules are tried in a
/// fixed order and the first that applies decides:
///
/// 1. a Coptic-only letter → Coptic, 1.0
/// 2. the exception word ⲁⲛⲍⲏⲃ → Coptic, 0.9
/// 3. a Greek-only letter → Greek, 0.9
/// 4. a lexicon entry → its language, 1.0
/// 5. a Greek prefix → Greek, 0.8
/// 6. a Greek suffix → Greek, 0.7
/// 7. otherwise unknown, 0.0
pub fn guess_word_language(word: &str, lexicon: &LoanLexicon) -> LanguageGuess {
    let key = strip_diacritics(word);

    if key.chars().any(|c| COPTIC_EXCLUSIVE.contains(&c)) {
        return LanguageGuess::new(Language::Coptic, 1.0);
    }
    if key == COPTIC_EXCEPTION {
        return LanguageGuess::new(Language::Coptic, 0.9);
    }
    if key.chars().any(|c| GREEK_EXCLUSIVE.contains(&c)) {
        return LanguageGuess::new(Language::Greek, 0.9);
    }
    if let Some(language) = lexicon.get_normalized(&key) {
        return LanguageGuess::new(language, 1.0);
    }
    if GREEK_PREFIXES.iter().any(|p| key.starts_with(p)) {
        return LanguageGuess::new(Language::Greek, 0.8);
    }
    if GREEK_SUFFIXES.iter().any(|s| key.ends_with(s)) {
        return LanguageGuess::new(Language::Greek, 0.7);
    }

    LanguageGuess::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LoanLexicon {
        LoanLexicon::parse("ⲁⲙⲏⲛ\tHebrew\nⲥⲱⲙⲁ\n").unwrap()
    }

    #[test]
    fn test_coptic_letter_beats_greek_suffix() {
        // ϣ plus the Greek ending -ⲟⲥ
        let guess = guess_word_language("ϣⲁⲣⲟⲥ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Coptic, 1.0));
    }

    #[test]
    fn test_exception_word() {
        let guess = guess_word_language("Ⲁⲛⲍⲏⲃ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Coptic, 0.9));
    }

    #[test]
    fn test_greek_letter() {
        let guess = guess_word_language("ⲇⲱⲣⲟⲛ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Greek, 0.9));
    }

    #[test]
    fn test_lexicon_lookup_ignores_case_and_marks() {
        let guess = guess_word_language("Ⲁⲙⲏ\u{300}ⲛ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Hebrew, 1.0));
        let guess = guess_word_language("ⲥⲱⲙⲁ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Greek, 1.0));
    }

    #[test]
    fn test_prefix_then_suffix() {
        let guess = guess_word_language("ⲡⲣⲟⲫⲏⲧⲏⲥ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Greek, 0.8));
        let guess = guess_word_language("ⲛⲟⲙⲟⲥ", &lexicon());
        assert_eq!(guess, LanguageGuess::new(Language::Greek, 0.7));
    }

    #[test]
    fn test_unknown() {
        let guess = guess_word_language("ⲣⲱⲙⲓ", &lexicon());
        assert_eq!(guess, LanguageGuess::unknown());
        assert_eq!(guess_word_language("", &lexicon()), LanguageGuess::unknown());
    }

    #[test]
    fn test_language_names() {
        assert_eq!(Language::from_name("hebrew"), Some(Language::Hebrew));
        assert_eq!(Language::from_name("GREEK"), Some(Language::Greek));
        assert_eq!(Language::from_name("Klingon"), None);
        assert_eq!(Language::Aramaic.to_string(), "Aramaic");
    }
}
