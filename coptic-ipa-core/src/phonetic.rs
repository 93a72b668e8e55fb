//! Phonetic data model
//!
//! A [`PhoneticWord`] is an ordered list of [`PhoneticEquivalent`]s, one per
//! source character, plus the offsets at which syllables break. Offsets are
//! unit indices: a break at `n` means a new syllable starts at unit `n`.
//!
//! Invariants:
//! - the source characters of the units spell the analyzed word, one unit per
//!   character (after jenkim repositioning, which keeps the length);
//! - breaks are sorted, unique, and strictly inside `(0, len)`.

use crate::error::{PhoneticError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One source character and the sound it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticEquivalent {
    /// The source character, always lower-cased
    pub source: char,
    /// IPA for this character; empty when the character is silent
    pub ipa: String,
    /// Whether the character was upper-case in the analyzed text
    pub is_upper: bool,
}

impl PhoneticEquivalent {
    /// Create a lower-case unit.
    pub fn new(source: char, ipa: impl Into<String>) -> Self {
        Self {
            source,
            ipa: ipa.into(),
            is_upper: false,
        }
    }

    /// The source character with its original casing applied.
    pub fn cased_source(&self) -> char {
        if self.is_upper {
            crate::script::to_upper(self.source)
        } else {
            self.source
        }
    }
}

/// A syllable view over a [`PhoneticWord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Source text of the syllable, cased
    pub source: String,
    /// IPA of the syllable
    pub ipa: String,
}

/// Break offsets; most words have only a handful of syllables.
pub type Breaks = SmallVec<[usize; 8]>;

/// An analyzed word: per-character phonetics plus syllable breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticWord {
    equivalents: Vec<PhoneticEquivalent>,
    breaks: Breaks,
}

impl PhoneticWord {
    /// Create a word with no syllable breaks.
    pub fn new(equivalents: Vec<PhoneticEquivalent>) -> Self {
        Self {
            equivalents,
            breaks: SmallVec::new(),
        }
    }

    /// Create a word with the given breaks, validating each one.
    pub fn with_breaks(
        equivalents: Vec<PhoneticEquivalent>,
        breaks: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut word = Self::new(equivalents);
        for offset in breaks {
            word.add_break(offset)?;
        }
        Ok(word)
    }

    /// A word whose units are the characters themselves.
    ///
    /// Used for separators (whitespace, punctuation, digits) so they
    /// round-trip through analysis untouched.
    pub fn literal(text: &str) -> Self {
        Self::new(
            text.chars()
                .map(|c| PhoneticEquivalent {
                    source: crate::script::to_lower(c),
                    ipa: c.to_string(),
                    is_upper: c.is_uppercase(),
                })
                .collect(),
        )
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.equivalents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equivalents.is_empty()
    }

    pub fn equivalents(&self) -> &[PhoneticEquivalent] {
        &self.equivalents
    }

    pub(crate) fn equivalents_mut(&mut self) -> &mut [PhoneticEquivalent] {
        &mut self.equivalents
    }

    /// Internal syllable breaks, sorted.
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// Insert a syllable break.
    ///
    /// Returns `Ok(false)` when the break was already present.
    pub fn add_break(&mut self, offset: usize) -> Result<bool> {
        if offset == 0 || offset >= self.equivalents.len() {
            return Err(PhoneticError::InvalidBreak {
                offset,
                len: self.equivalents.len(),
            });
        }
        match self.breaks.binary_search(&offset) {
            Ok(_) => Ok(false),
            Err(pos) => {
                self.breaks.insert(pos, offset);
                Ok(true)
            }
        }
    }

    pub(crate) fn set_breaks(&mut self, breaks: Breaks) {
        debug_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(breaks
            .iter()
            .all(|&b| b > 0 && b < self.equivalents.len()));
        self.breaks = breaks;
    }

    /// Append another word, shifting its breaks and breaking between the two.
    ///
    /// This is how a stripped prefix and its base are spliced back together.
    pub fn append(&mut self, other: PhoneticWord) {
        let offset = self.equivalents.len();
        let had_units = offset > 0 && !other.is_empty();
        self.equivalents.extend(other.equivalents);
        if had_units {
            self.breaks.push(offset);
        }
        self.breaks.extend(other.breaks.into_iter().map(|b| b + offset));
        self.breaks.sort_unstable();
        self.breaks.dedup();
    }

    /// Apply casing from the original text, position by position.
    ///
    /// `original` must already be jenkim-normalized so positions line up.
    /// Positions past the end of `original` are left lower-case.
    pub fn restore_casing(&mut self, original: &[char]) {
        for (i, unit) in self.equivalents.iter_mut().enumerate() {
            unit.is_upper = original.get(i).is_some_and(|c| c.is_uppercase());
        }
    }

    /// Source text with casing applied.
    pub fn source_text(&self) -> String {
        self.equivalents.iter().map(|e| e.cased_source()).collect()
    }

    /// Concatenated IPA of all units.
    pub fn ipa(&self) -> String {
        self.equivalents.iter().map(|e| e.ipa.as_str()).collect()
    }

    /// Unit ranges of each syllable.
    pub fn syllable_ranges(&self) -> Vec<std::ops::Range<usize>> {
        let mut ranges = Vec::with_capacity(self.breaks.len() + 1);
        let mut start = 0;
        for &b in &self.breaks {
            ranges.push(start..b);
            start = b;
        }
        if start < self.equivalents.len() || ranges.is_empty() {
            ranges.push(start..self.equivalents.len());
        }
        ranges
    }

    /// Per-syllable source and IPA.
    pub fn syllables(&self) -> Vec<Syllable> {
        self.syllable_ranges()
            .into_iter()
            .map(|range| {
                let units = &self.equivalents[range];
                Syllable {
                    source: units.iter().map(|e| e.cased_source()).collect(),
                    ipa: units.iter().map(|e| e.ipa.as_str()).collect(),
                }
            })
            .collect()
    }

    /// IPA with syllables joined by `separator`.
    ///
    /// Syllables whose IPA is empty are skipped so that silent split markers
    /// do not produce doubled separators.
    pub fn ipa_syllabified(&self, separator: &str) -> String {
        self.syllables()
            .into_iter()
            .map(|s| s.ipa)
            .filter(|ipa| !ipa.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Whether any unit is a letter (as opposed to a separator token).
    pub fn is_lexical(&self) -> bool {
        self.equivalents.iter().any(|e| e.source.is_alphabetic())
    }
}

impl fmt::Display for PhoneticWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ipa_syllabified("."))
    }
}

/// IPA of a whole analyzed text, separators included.
pub fn ipa_text(words: &[PhoneticWord], separator: &str) -> String {
    words.iter().map(|w| w.ipa_syllabified(separator)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(pairs: &[(char, &str)]) -> PhoneticWord {
        PhoneticWord::new(
            pairs
                .iter()
                .map(|&(c, ipa)| PhoneticEquivalent::new(c, ipa))
                .collect(),
        )
    }

    #[test]
    fn test_add_break_rejects_edges() {
        let mut w = word(&[('ⲁ', "ɑ"), ('ⲙ', "m"), ('ⲏ', "iː"), ('ⲛ', "n")]);
        assert!(w.add_break(0).is_err());
        assert!(w.add_break(4).is_err());
        assert!(w.add_break(1).unwrap());
        assert!(!w.add_break(1).unwrap());
        assert_eq!(w.breaks(), &[1]);
    }

    #[test]
    fn test_breaks_stay_sorted() {
        let mut w = word(&[('ⲁ', "ɑ"), ('ⲃ', "v"), ('ⲃ', "v"), ('ⲁ', "ɑ")]);
        w.add_break(3).unwrap();
        w.add_break(1).unwrap();
        w.add_break(2).unwrap();
        assert_eq!(w.breaks(), &[1, 2, 3]);
    }

    #[test]
    fn test_append_shifts_breaks() {
        let mut prefix = word(&[('ⲡ', "p"), ('ⲓ', "i")]);
        let mut base = word(&[('ⲥ', "s"), ('ⲱ', "oː"), ('ⲧ', "t"), ('ⲏ', "iː"), ('ⲣ', "ɾ")]);
        base.add_break(2).unwrap();
        prefix.append(base);
        assert_eq!(prefix.len(), 7);
        assert_eq!(prefix.breaks(), &[2, 4]);
    }

    #[test]
    fn test_append_to_empty_adds_no_break() {
        let mut empty = PhoneticWord::default();
        empty.append(word(&[('ⲁ', "ɑ"), ('ⲛ', "n")]));
        assert!(empty.breaks().is_empty());
    }

    #[test]
    fn test_syllables_and_ipa() {
        let mut w = word(&[('ⲁ', "ɑ"), ('ⲙ', "m"), ('ⲏ', "iː"), ('ⲛ', "n")]);
        w.add_break(1).unwrap();
        w.restore_casing(&['Ⲁ', 'ⲙ', 'ⲏ', 'ⲛ']);

        assert_eq!(w.ipa(), "ɑmiːn");
        assert_eq!(w.source_text(), "Ⲁⲙⲏⲛ");
        assert_eq!(w.ipa_syllabified("."), "ɑ.miːn");
        assert_eq!(w.to_string(), "ɑ.miːn");

        let syllables = w.syllables();
        assert_eq!(syllables.len(), 2);
        assert_eq!(syllables[0].source, "Ⲁ");
        assert_eq!(syllables[1].ipa, "miːn");
    }

    #[test]
    fn test_empty_word_has_one_empty_syllable_range() {
        let w = PhoneticWord::default();
        assert_eq!(w.syllable_ranges(), vec![0..0]);
    }

    #[test]
    fn test_literal_keeps_separators() {
        let w = PhoneticWord::literal(", ");
        assert_eq!(w.len(), 2);
        assert_eq!(w.ipa(), ", ");
        assert_eq!(w.source_text(), ", ");
        assert!(!w.is_lexical());
    }

    #[test]
    fn test_ipa_text_joins_words_and_separators() {
        let mut amen = word(&[('ⲁ', "ɑ"), ('ⲙ', "m"), ('ⲏ', "iː"), ('ⲛ', "n")]);
        amen.add_break(1).unwrap();
        let words = vec![amen, PhoneticWord::literal(". ")];
        assert_eq!(ipa_text(&words, "."), "ɑ.miːn. ");
    }

    #[test]
    fn test_with_breaks_validates() {
        let units = vec![PhoneticEquivalent::new('ⲁ', "ɑ")];
        assert!(PhoneticWord::with_breaks(units, [1]).is_err());
    }
}
