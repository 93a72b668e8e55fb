//! Dialect-aware Coptic phonetic transcription and syllabification
//!
//! This crate turns Coptic (and Greek) script into IPA annotated with
//! syllable boundaries. One pipeline is shared by every dialect:
//!
//! - **Tables**: known pronunciations, grammatical prefixes and per-dialect
//!   letter tables, all TOML embedded at compile time
//! - **Rules**: a letter-context pass per dialect that rewrites each
//!   character's IPA from its neighbours and the word's guessed origin
//! - **Syllables**: a two-pass maximal-onset algorithm shared by all dialects
//!
//! # Example
//!
//! ```rust
//! use coptic_ipa_core::{ipa_text, Analyzer, Dialect};
//!
//! let analyzer = Analyzer::new(Dialect::GrecoBohairic).unwrap();
//! let words = analyzer.analyze("ⲁⲙⲏⲛ");
//! assert_eq!(ipa_text(&words, "."), "ɑ.miːn");
//! ```

pub mod analyzer;
pub mod dialect;
pub mod error;
pub mod lexicon;
pub mod origin;
pub mod phonetic;
pub mod respell;
pub mod script;
pub mod ssml;
pub mod syllable;
pub mod tables;

pub use analyzer::{AnalyzeOptions, Analyzer, AnalyzerBuilder};
pub use dialect::Dialect;
pub use error::{PhoneticError, Result};
pub use lexicon::LoanLexicon;
pub use origin::{guess_word_language, Language, LanguageGuess};
pub use phonetic::{ipa_text, Breaks, PhoneticEquivalent, PhoneticWord, Syllable};
pub use respell::{DisplayLanguage, Respeller};
pub use ssml::render_ssml;
pub use syllable::syllabify;
pub use tables::KnownWords;
