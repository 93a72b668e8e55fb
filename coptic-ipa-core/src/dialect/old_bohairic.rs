//! Old Bohairic letter rules

use super::{gamma_before, Neighbours};
use crate::phonetic::PhoneticEquivalent;
use crate::script::{is_consonant, is_vowel, JENKIM};

pub(super) fn apply(units: &mut [PhoneticEquivalent]) {
    let last = units.len().saturating_sub(1);

    for c in (0..units.len()).rev() {
        let ch = units[c].source;
        let n = Neighbours::at(units, c);
        let gamma = gamma_before(units.get(c + 1));

        let ipa = match ch {
            'ⲃ' if c == last => Some("b"),
            'ⲩ' if n.prev == Some('ⲟ') => {
                units[c - 1].ipa = "u".to_string();
                Some("")
            }
            'ⲩ' => Some("w"),
            'ⲓ' if n.next == Some('ⲉ') => {
                units[c + 1].ipa = "e".to_string();
                Some("")
            }
            'ⲓ' if n.next.is_some_and(is_vowel) => Some(if n.prev.is_some_and(is_consonant) {
                "ij"
            } else {
                "j"
            }),
            'ⲓ' if n.prev.is_some_and(is_vowel) => Some("ə"),
            'ⲅ' => gamma,
            JENKIM if n.next.is_some_and(is_vowel) => Some(""),
            _ => None,
        };

        if let Some(ipa) = ipa {
            units[c].ipa = ipa.to_string();
        }
    }
}
