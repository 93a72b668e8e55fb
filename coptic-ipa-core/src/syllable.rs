//! Syllable-boundary algorithm
//!
//! Two passes over a transcribed word. The first scans right to left and
//! proposes breaks following the maximal onset principle, with overrides
//! for the jenkim, ϯ, long vowels and the ⲟⲩ digraph. The second walks the
//! resulting segments left to right and folds consonant-only segments into
//! a neighbouring syllable.

use crate::phonetic::{Breaks, PhoneticEquivalent};
use crate::script::{ipa_has_vowel, is_consonant, is_vowel, JENKIM, TEE};

/// Compute the internal syllable breaks of a transcribed word.
///
/// Units must already carry their final IPA: long vowels and vowel-bearing
/// IPA on consonant letters both affect the result.
pub fn syllabify(units: &[PhoneticEquivalent]) -> Breaks {
    let len = units.len();
    if len < 2 {
        return Breaks::new();
    }

    let mut bounds = propose_breaks(units);
    bounds.retain(|b| *b <= len);
    bounds.push(0);
    bounds.push(len);
    bounds.sort_unstable();
    bounds.dedup();

    merge_segments(units, &mut bounds);

    bounds.into_iter().filter(|&b| b > 0 && b < len).collect()
}

fn source_at(units: &[PhoneticEquivalent], idx: usize) -> Option<char> {
    units.get(idx).map(|u| u.source)
}

/// Pass 1: right-to-left scan, first matching rule per position.
fn propose_breaks(units: &[PhoneticEquivalent]) -> Breaks {
    let len = units.len();
    let mut breaks = Breaks::new();

    for c in (0..len).rev() {
        let unit = &units[c];
        let ch = unit.source;
        let prev = c.checked_sub(1).and_then(|p| source_at(units, p));
        let next = source_at(units, c + 1);

        if ch == JENKIM || ch == TEE {
            breaks.push(c);
        } else if unit.ipa.ends_with('ː') {
            // The long vowel's onset consonant opens the syllable
            if let Some(onset) = c.checked_sub(1) {
                breaks.push(onset);
            }
        } else if ch == 'ⲟ' && next == Some('ⲩ') {
            breaks.push(c);
            if let Some(before) = c.checked_sub(1) {
                breaks.push(before);
            }
        } else if ch == 'ⲩ' && prev == Some('ⲟ') {
            // Second half of ⲟⲩ, handled at the ⲟ
        } else if ch == 'ⲓ' && matches!(next, Some('ⲁ' | 'ⲉ' | 'ⲟ')) {
            // ⲓ glide stays with its vowel
        } else if is_cvc(prev, ch, next) {
            breaks.push(c - 1);
        } else if let Some(n) = next {
            if is_vowel(ch) != is_vowel(n) {
                breaks.push(c);
            }
        }
    }

    breaks
}

/// Consonant-vowel-consonant centred on `centre`
fn is_cvc(prev: Option<char>, centre: char, next: Option<char>) -> bool {
    match (prev, next) {
        (Some(p), Some(n)) => is_consonant(p) && is_vowel(centre) && is_consonant(n),
        _ => false,
    }
}

fn is_consonant_only(segment: &[PhoneticEquivalent]) -> bool {
    !segment
        .iter()
        .any(|u| is_vowel(u.source) || ipa_has_vowel(&u.ipa))
}

/// Whether a consonant-only segment starting at `start` belongs to the
/// syllable before it rather than the one after it.
///
/// The offsets are fixed relative to `start` and do not follow the segment's
/// actual length.
fn merges_backward(units: &[PhoneticEquivalent], start: usize) -> bool {
    let at = |offset: usize| source_at(units, start + offset);

    let ou_before_vowel =
        at(1) == Some('ⲟ') && at(2) == Some('ⲩ') && at(3).is_some_and(is_vowel);

    ou_before_vowel || at(1) == Some(TEE) || at(1) == Some(JENKIM)
}

/// Pass 2: fold empty and consonant-only segments into a neighbour.
///
/// `bounds` holds every boundary including `0` and `len`.
fn merge_segments(units: &[PhoneticEquivalent], bounds: &mut Breaks) {
    let mut i = 0;
    while i + 1 < bounds.len() {
        let (start, end) = (bounds[i], bounds[i + 1]);

        if start == end {
            bounds.remove(i + 1);
            continue;
        }

        if !is_consonant_only(&units[start..end]) {
            i += 1;
            continue;
        }

        let is_first = i == 0;
        let is_last = i + 2 == bounds.len();

        if !is_first && (is_last || merges_backward(units, start)) {
            bounds.remove(i);
        } else if !is_last {
            // Re-examine the merged segment on the next iteration
            bounds.remove(i + 1);
        } else {
            // The whole word is one consonant-only segment
            break;
        }
    }
}
