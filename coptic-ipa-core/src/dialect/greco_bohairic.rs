//! Greco-Bohairic letter rules

use super::{gamma_before, Neighbours};
use crate::origin::Language;
use crate::phonetic::PhoneticEquivalent;
use crate::script::{is_consonant, is_front_vowel, is_vowel, JENKIM};

/// Rewrite each unit from its neighbours.
///
/// Positions are visited from the end of the word so a rule that reads its
/// successor's IPA sees the final value. `origin` only matters for ⲭ, ⲥ
/// and ⲧ.
pub(super) fn apply(units: &mut [PhoneticEquivalent], origin: Language) {
    let greek = origin == Language::Greek;

    for c in (0..units.len()).rev() {
        let ch = units[c].source;
        let n = Neighbours::at(units, c);
        let gamma = gamma_before(units.get(c + 1));

        let ipa = match ch {
            'ⲩ' if n.prev == Some('ⲟ') => {
                let glide = n.next.is_some_and(|v| is_vowel(v) && v != 'ⲱ');
                units[c - 1].ipa = if glide { "w" } else { "u" }.to_string();
                Some("")
            }
            'ⲩ' if matches!(n.prev, Some('ⲁ' | 'ⲉ')) => Some("v"),
            'ⲓ' if n.next.is_some_and(is_vowel) => Some(if n.prev.is_some_and(is_consonant) {
                "ij"
            } else {
                "j"
            }),
            'ⲓ' if n.prev.is_some_and(is_vowel) => {
                // ⲟⲩⲓ keeps the plain vowel
                if n.prev == Some('ⲩ') && n.prev2 == Some('ⲟ') {
                    None
                } else {
                    Some("ɪ")
                }
            }
            'ⲑ' if matches!(n.prev, Some('ⲥ' | 'ϣ')) => Some("t"),
            'ⲭ' if greek => Some(if n.next.is_some_and(is_front_vowel) {
                "ç"
            } else {
                "x"
            }),
            'ⲭ' => Some("k"),
            'ⲥ' if greek && (is_nasal(n.prev) || is_nasal(n.next)) => Some("z"),
            'ⲅ' => Some(gamma.unwrap_or("ɣ")),
            'ⲧ' if greek && n.prev == Some('ⲛ') => Some("d"),
            JENKIM => Some(if n.next.is_some_and(is_vowel) { "" } else { "ɛ" }),
            'ⲃ' if n.next.is_some_and(is_vowel) => Some("v"),
            'ϫ' if n.next.is_some_and(is_front_vowel) => Some("ʤ"),
            'ⲝ' if n.next.is_some_and(is_consonant) => Some("ɛks"),
            _ => None,
        };

        if let Some(ipa) = ipa {
            units[c].ipa = ipa.to_string();
        }
    }
}

fn is_nasal(ch: Option<char>) -> bool {
    matches!(ch, Some('ⲙ' | 'ⲛ'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{load_dialect_config, TranscriptionTable};

    fn transcribe(word: &str, origin: Language) -> Vec<String> {
        let table =
            TranscriptionTable::from_config(&load_dialect_config("greco-bohairic").unwrap())
                .unwrap();
        let mut units: Vec<PhoneticEquivalent> = word
            .chars()
            .map(|c| PhoneticEquivalent::new(c, table.transcribe(c)))
            .collect();
        apply(&mut units, origin);
        units.into_iter().map(|u| u.ipa).collect()
    }

    #[test]
    fn test_ou_before_vowel_is_glide() {
        assert_eq!(transcribe("ⲟⲩⲟϩ", Language::Coptic), ["w", "", "o", "h"]);
    }

    #[test]
    fn test_ou_before_omega_or_consonant_is_u() {
        assert_eq!(transcribe("ⲛⲟⲩⲃ", Language::Coptic), ["n", "u", "", "b"]);
        assert_eq!(transcribe("ⲟⲩⲱ", Language::Coptic), ["u", "", "oː"]);
    }

    #[test]
    fn test_upsilon_after_a_or_e() {
        assert_eq!(transcribe("ⲉⲩ", Language::Unknown), ["e", "v"]);
        assert_eq!(transcribe("ⲁⲩⲱ", Language::Unknown), ["ɑ", "v", "oː"]);
    }

    #[test]
    fn test_iota_glides() {
        assert_eq!(transcribe("ⲓⲁ", Language::Unknown), ["j", "ɑ"]);
        assert_eq!(transcribe("ⲙⲓⲁ", Language::Unknown), ["m", "ij", "ɑ"]);
        assert_eq!(transcribe("ⲁⲓ", Language::Unknown), ["ɑ", "ɪ"]);
        assert_eq!(transcribe("ⲟⲩⲓ", Language::Unknown), ["w", "", "i"]);
    }

    #[test]
    fn test_theta_after_sibilant() {
        assert_eq!(transcribe("ⲥⲑ", Language::Unknown), ["s", "t"]);
        assert_eq!(transcribe("ⲁⲑ", Language::Unknown), ["ɑ", "θ"]);
    }

    #[test]
    fn test_chi_depends_on_origin() {
        assert_eq!(transcribe("ⲭⲉ", Language::Greek), ["ç", "e"]);
        assert_eq!(transcribe("ⲭⲁ", Language::Greek), ["x", "ɑ"]);
        assert_eq!(transcribe("ⲭⲉ", Language::Coptic), ["k", "e"]);
        assert_eq!(transcribe("ⲭⲉ", Language::Unknown), ["k", "e"]);
    }

    #[test]
    fn test_sigma_and_tau_in_greek_words() {
        assert_eq!(transcribe("ⲕⲟⲥⲙⲟⲥ", Language::Greek)[2], "z");
        assert_eq!(transcribe("ⲕⲟⲥⲙⲟⲥ", Language::Coptic)[2], "s");
        assert_eq!(transcribe("ⲁⲛⲧⲓ", Language::Greek)[2], "d");
        assert_eq!(transcribe("ⲁⲛⲧⲓ", Language::Coptic)[2], "t");
    }

    #[test]
    fn test_gamma_assimilation() {
        let ipa = transcribe("ⲁⲅⲅⲉⲗⲟⲥ", Language::Greek);
        assert_eq!(&ipa[1..3], ["ŋ", "g"]);
        assert_eq!(transcribe("ⲁⲅⲁ", Language::Greek)[1], "ɣ");
    }

    #[test]
    fn test_jenkim_before_vowel_is_silent() {
        assert_eq!(transcribe("\u{300}ⲟ", Language::Coptic), ["", "o"]);
        assert_eq!(transcribe("\u{300}ⲛ", Language::Coptic), ["ɛ", "n"]);
    }

    #[test]
    fn test_beta_janja_and_xi() {
        assert_eq!(transcribe("ⲃⲁ", Language::Unknown), ["v", "ɑ"]);
        assert_eq!(transcribe("ⲃⲩ", Language::Unknown), ["v", "i"]);
        assert_eq!(transcribe("ⲁⲃ", Language::Unknown), ["ɑ", "b"]);
        assert_eq!(transcribe("ϫⲉ", Language::Unknown), ["ʤ", "e"]);
        assert_eq!(transcribe("ϫⲁ", Language::Unknown), ["g", "ɑ"]);
        assert_eq!(transcribe("ⲝⲧ", Language::Unknown), ["ɛks", "t"]);
    }
}
