//! Letter classes and script-level helpers
//!
//! Everything here works on single `char`s of the Coptic block (U+2C80..U+2CFF)
//! plus the Coptic letters that live in the Greek block (U+03E2..U+03EF).
//! Helpers expect lower-cased input unless stated otherwise.

use unicode_normalization::UnicodeNormalization;

/// Combining grave accent used as the jenkim mark.
pub const JENKIM: char = '\u{0300}';

/// The "tee" ligature, pronounced as a full syllable.
pub const TEE: char = 'ϯ';

/// Coptic vowel letters.
pub const VOWELS: [char; 7] = ['ⲁ', 'ⲉ', 'ⲏ', 'ⲓ', 'ⲟ', 'ⲩ', 'ⲱ'];

/// Letters that only occur in native Coptic words.
pub const COPTIC_EXCLUSIVE: [char; 6] = ['ϣ', 'ϥ', 'ϧ', 'ϫ', 'ϯ', 'ϭ'];

/// Letters that only occur in Greek loan words.
pub const GREEK_EXCLUSIVE: [char; 5] = ['ⲅ', 'ⲇ', 'ⲍ', 'ⲝ', 'ⲯ'];

/// Greek lower-case letters paired with their Coptic counterparts.
const GREEK_COPTIC: [(char, char); 24] = [
    ('α', 'ⲁ'),
    ('β', 'ⲃ'),
    ('γ', 'ⲅ'),
    ('δ', 'ⲇ'),
    ('ε', 'ⲉ'),
    ('ζ', 'ⲍ'),
    ('η', 'ⲏ'),
    ('θ', 'ⲑ'),
    ('ι', 'ⲓ'),
    ('κ', 'ⲕ'),
    ('λ', 'ⲗ'),
    ('μ', 'ⲙ'),
    ('ν', 'ⲛ'),
    ('ξ', 'ⲝ'),
    ('ο', 'ⲟ'),
    ('π', 'ⲡ'),
    ('ρ', 'ⲣ'),
    ('σ', 'ⲥ'),
    ('τ', 'ⲧ'),
    ('υ', 'ⲩ'),
    ('φ', 'ⲫ'),
    ('χ', 'ⲭ'),
    ('ψ', 'ⲯ'),
    ('ω', 'ⲱ'),
];

/// IPA symbols that carry a vowel sound.
const IPA_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'ɑ', 'ɛ', 'ɪ', 'ɔ', 'ʊ', 'ə', 'æ', 'ʌ', 'ɐ', 'ø', 'œ', 'ɒ',
    'ɨ', 'ʉ', 'ɯ', 'ɤ',
];

/// IPA symbols that begin a front vowel.
const IPA_FRONT_VOWELS: &[char] = &['e', 'i', 'ɪ', 'ɛ', 'y', 'æ', 'ø', 'œ'];

/// Lower-case a single character, keeping it a single character.
#[inline]
pub fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Upper-case a single character, keeping it a single character.
#[inline]
pub fn to_upper(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Vowels that palatalize a preceding consonant.
#[inline]
pub fn is_front_vowel(ch: char) -> bool {
    matches!(ch, 'ⲉ' | 'ⲏ' | 'ⲓ' | 'ⲩ')
}

/// A letter that is not a vowel. The jenkim is neither.
#[inline]
pub fn is_consonant(ch: char) -> bool {
    ch != JENKIM && ch.is_alphabetic() && !is_vowel(ch)
}

/// Whether an IPA string contains any vowel sound.
pub fn ipa_has_vowel(ipa: &str) -> bool {
    ipa.chars().any(|c| IPA_VOWELS.contains(&c))
}

/// Whether an IPA string begins with a front vowel.
pub fn ipa_starts_with_front_vowel(ipa: &str) -> bool {
    ipa.chars()
        .next()
        .is_some_and(|c| IPA_FRONT_VOWELS.contains(&c))
}

/// Move every jenkim in front of the character it follows.
///
/// Text encodes the jenkim as a combining mark after its base letter. The
/// rule pass and the syllable algorithm want it before the letter, so this
/// produces a new sequence with each mark swapped with its predecessor.
/// A leading jenkim, or one following another jenkim, stays where it is.
/// The length never changes.
pub fn normalize_jenkim(chars: &[char]) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for &ch in chars {
        match out.last().copied() {
            Some(prev) if ch == JENKIM && prev != JENKIM => {
                let last = out.len() - 1;
                out[last] = JENKIM;
                out.push(prev);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Remove combining marks and lower-case, for dictionary-style matching.
pub fn strip_diacritics(word: &str) -> String {
    word.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .map(to_lower)
        .collect()
}

/// Transliterate one Greek letter into the Coptic block.
///
/// Accented letters lose their accents, final sigma becomes ⲥ, and case is
/// preserved. Anything that is not a Greek letter is returned unchanged.
pub fn greek_to_coptic(ch: char) -> char {
    if ch == 'ς' {
        return 'ⲥ';
    }
    let base = std::iter::once(ch).nfd().next().unwrap_or(ch);
    let lower = to_lower(base);
    match GREEK_COPTIC.iter().find(|(g, _)| *g == lower) {
        Some(&(_, coptic)) if base != lower => to_upper(coptic),
        Some(&(_, coptic)) => coptic,
        None => ch,
    }
}

/// Transliterate one Coptic letter back into the Greek block.
///
/// Coptic-only letters and marks are returned unchanged.
pub fn coptic_to_greek(ch: char) -> char {
    let lower = to_lower(ch);
    match GREEK_COPTIC.iter().find(|(_, c)| *c == lower) {
        Some(&(greek, _)) if ch != lower => to_upper(greek),
        Some(&(greek, _)) => greek,
        None => ch,
    }
}
