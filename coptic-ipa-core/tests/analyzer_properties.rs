//! Property-based tests for the structural invariants of analyzed words

use coptic_ipa_core::script::{to_upper, JENKIM};
use coptic_ipa_core::{Analyzer, Dialect, PhoneticWord};
use proptest::prelude::*;

const LETTERS: &[char] = &[
    'ⲁ', 'ⲃ', 'ⲅ', 'ⲇ', 'ⲉ', 'ⲍ', 'ⲏ', 'ⲑ', 'ⲓ', 'ⲕ', 'ⲗ', 'ⲙ', 'ⲛ', 'ⲝ', 'ⲟ', 'ⲡ', 'ⲣ', 'ⲥ',
    'ⲧ', 'ⲩ', 'ⲫ', 'ⲭ', 'ⲯ', 'ⲱ', 'ϣ', 'ϥ', 'ϧ', 'ϩ', 'ϫ', 'ϭ', 'ϯ', JENKIM,
];

const GREEK_LETTERS: &[char] = &[
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ',
    'ς', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω', 'ά', 'έ', 'ή', 'ί', 'ό', 'ύ', 'ώ', '\u{301}', '\u{300}',
];

// Lower-case Coptic words, jenkim included
fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LETTERS), 1..=12)
        .prop_map(|chars| chars.into_iter().collect())
}

// Lower-case Greek words, precomposed and combining accents included
fn greek_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(GREEK_LETTERS), 1..=12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn coptic_dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(vec![Dialect::GrecoBohairic, Dialect::OldBohairic])
}

fn single(analyzer: &Analyzer, word: &str) -> PhoneticWord {
    let mut words = analyzer.analyze(word);
    assert_eq!(words.len(), 1, "{word} split into several tokens");
    words.remove(0)
}

proptest! {
    #[test]
    fn prop_one_unit_per_character(word in word_strategy(), dialect in coptic_dialect()) {
        let analyzer = Analyzer::new(dialect).unwrap();
        let result = single(&analyzer, &word);
        prop_assert_eq!(result.len(), word.chars().count());
    }

    #[test]
    fn prop_breaks_sorted_and_inside(word in word_strategy(), dialect in coptic_dialect()) {
        let analyzer = Analyzer::new(dialect).unwrap();
        let result = single(&analyzer, &word);
        let breaks = result.breaks();

        prop_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(breaks.iter().all(|&b| b > 0 && b < result.len()));
    }

    #[test]
    fn prop_cache_ignores_casing(word in word_strategy(), dialect in coptic_dialect()) {
        let analyzer = Analyzer::new(dialect).unwrap();
        let upper: String = word.chars().map(to_upper).collect();

        let lower_result = single(&analyzer, &word);
        let upper_result = single(&analyzer, &upper);

        prop_assert_eq!(lower_result.ipa(), upper_result.ipa());
        prop_assert_eq!(lower_result.breaks(), upper_result.breaks());
        for (l, u) in lower_result.equivalents().iter().zip(upper_result.equivalents()) {
            prop_assert_eq!(l.source, u.source);
            prop_assert!(!l.is_upper);
            prop_assert_eq!(u.is_upper, u.source != JENKIM);
        }
    }

    #[test]
    fn prop_cached_equals_uncached(word in word_strategy(), dialect in coptic_dialect()) {
        let analyzer = Analyzer::new(dialect).unwrap();
        let first = single(&analyzer, &word);
        let second = single(&analyzer, &word);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_greek_one_unit_per_character(word in greek_word_strategy()) {
        let analyzer = Analyzer::new(Dialect::Greek).unwrap();
        let result = single(&analyzer, &word);
        prop_assert_eq!(result.len(), word.chars().count());
        // Only the sigma form may change
        prop_assert_eq!(result.source_text().replace('ς', "σ"), word.replace('ς', "σ"));
    }

    #[test]
    fn prop_greek_breaks_sorted_and_inside(word in greek_word_strategy()) {
        let analyzer = Analyzer::new(Dialect::Greek).unwrap();
        let result = single(&analyzer, &word);
        let breaks = result.breaks();

        prop_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(breaks.iter().all(|&b| b > 0 && b < result.len()));
    }

    #[test]
    fn prop_greek_cache_ignores_casing(word in greek_word_strategy()) {
        let analyzer = Analyzer::new(Dialect::Greek).unwrap();
        let upper: String = word.chars().map(to_upper).collect();

        let lower_result = single(&analyzer, &word);
        let upper_result = single(&analyzer, &upper);

        prop_assert_eq!(lower_result.ipa(), upper_result.ipa());
        prop_assert_eq!(lower_result.breaks(), upper_result.breaks());
        prop_assert_eq!(upper_result.len(), upper.chars().count());
        prop_assert!(lower_result.equivalents().iter().all(|u| !u.is_upper));
    }
}
