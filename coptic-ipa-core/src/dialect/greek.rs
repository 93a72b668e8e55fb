//! Greek-script wrapper
//!
//! Greek input is transliterated into the Coptic block one character at a
//! time, run through the Greco-Bohairic pipeline, then given back its
//! original Greek characters.

use crate::phonetic::PhoneticWord;
use crate::script::{coptic_to_greek, greek_to_coptic, to_lower, JENKIM};

/// Combining acute accent
const ACUTE: char = '\u{301}';

/// Transliterate a Greek token into Coptic letters.
///
/// The result has exactly one character per input character. Combining
/// marks stay in place; a combining grave would read as the jenkim and is
/// carried as an acute instead.
pub fn to_coptic(token: &str) -> String {
    token
        .chars()
        .map(|ch| if ch == JENKIM { ACUTE } else { greek_to_coptic(ch) })
        .collect()
}

/// Give every unit back its Greek source character.
///
/// `original` is the token as it was passed to [`to_coptic`]. Units past
/// its end, such as those of a known pronunciation with a different
/// length, are mapped back letter by letter. A lower-case σ in last
/// position becomes ς.
pub fn to_greek(word: &mut PhoneticWord, original: &[char]) {
    let units = word.equivalents_mut();
    for (i, unit) in units.iter_mut().enumerate() {
        unit.source = match original.get(i) {
            Some(&ch) => to_lower(ch),
            None => coptic_to_greek(unit.source),
        };
    }
    if let Some(last) = units.last_mut() {
        if last.source == 'σ' && !last.is_upper {
            last.source = 'ς';
        }
    }
}
