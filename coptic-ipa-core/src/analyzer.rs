//! Analyzer pipeline
//!
//! [`Analyzer`] turns text into [`PhoneticWord`]s. Each word token goes
//! through, in order: the whole-token known table, the cache, prefix
//! stripping, the base known table, the cache again for the base, and
//! finally default transcription, the dialect's rule pass and the syllable
//! algorithm. Casing is restored last, on a private copy.

use crate::dialect::{greek, Dialect};
use crate::error::{PhoneticError, Result};
use crate::lexicon::LoanLexicon;
use crate::origin::{guess_word_language, Language, LanguageGuess};
use crate::phonetic::{PhoneticEquivalent, PhoneticWord};
use crate::script::{normalize_jenkim, to_lower, JENKIM};
use crate::syllable::syllabify;
use crate::tables::{load_dialect_config, load_known_words, KnownWords, TranscriptionTable};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, trace};

/// Runs of letters and combining marks; everything else separates words.
const WORD_PATTERN: &str = r"[\p{L}\p{M}]+";

/// Per-call switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Read and populate the word cache
    pub use_cache: bool,
    /// Strip grammatical prefixes before transcribing
    pub check_prefixes: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            check_prefixes: true,
        }
    }
}

/// Dialect-specific transcriber with its own word cache.
///
/// An analyzer is `Send + Sync`; the cache is the only mutable state and is
/// guarded by a mutex.
#[derive(Debug)]
pub struct Analyzer {
    dialect: Dialect,
    table: TranscriptionTable,
    known: Arc<KnownWords>,
    lexicon: Arc<LoanLexicon>,
    word_pattern: Regex,
    cache: Mutex<HashMap<String, PhoneticWord>>,
}

impl Analyzer {
    /// Analyzer with the bundled tables and lexicon.
    pub fn new(dialect: Dialect) -> Result<Self> {
        AnalyzerBuilder::new(dialect).build()
    }

    pub fn builder(dialect: Dialect) -> AnalyzerBuilder {
        AnalyzerBuilder::new(dialect)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn known_words(&self) -> &KnownWords {
        &self.known
    }

    pub fn lexicon(&self) -> &LoanLexicon {
        &self.lexicon
    }

    /// Analyze with the cache and prefix stripping enabled.
    pub fn analyze(&self, text: &str) -> Vec<PhoneticWord> {
        self.analyze_with(text, AnalyzeOptions::default())
    }

    /// Analyze `text`, keeping separators as literal words.
    pub fn analyze_with(&self, text: &str, options: AnalyzeOptions) -> Vec<PhoneticWord> {
        let mut words = Vec::new();
        let mut last_end = 0;

        for m in self.word_pattern.find_iter(text) {
            if m.start() > last_end {
                words.push(PhoneticWord::literal(&text[last_end..m.start()]));
            }
            words.push(self.analyze_token(m.as_str(), options));
            last_end = m.end();
        }
        if last_end < text.len() {
            words.push(PhoneticWord::literal(&text[last_end..]));
        }

        words
    }

    /// Analyze a single word token.
    pub fn analyze_token(&self, token: &str, options: AnalyzeOptions) -> PhoneticWord {
        match self.dialect {
            Dialect::Greek => {
                let coptic = greek::to_coptic(token);
                let mut word = self.analyze_coptic(&coptic, options);
                greek::to_greek(&mut word, &token.chars().collect::<Vec<_>>());
                word
            }
            _ => self.analyze_coptic(token, options),
        }
    }

    /// Origin guess against this analyzer's lexicon
    pub fn guess_origin(&self, word: &str) -> LanguageGuess {
        guess_word_language(word, &self.lexicon)
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    /// Number of cached base words
    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, PhoneticWord>> {
        // A panic elsewhere cannot leave a half-written entry behind
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cached(&self, key: &str) -> Option<PhoneticWord> {
        let hit = self.cache().get(key).cloned();
        if hit.is_some() {
            trace!(word = key, "cache hit");
        }
        hit
    }

    fn analyze_coptic(&self, token: &str, options: AnalyzeOptions) -> PhoneticWord {
        let original = normalize_jenkim(&token.chars().collect::<Vec<_>>());
        let key: String = token.chars().map(to_lower).collect();

        let mut word = self.resolve(&key, options);
        word.restore_casing(&original);
        word
    }

    /// Un-cased result for a lower-cased token.
    fn resolve(&self, key: &str, options: AnalyzeOptions) -> PhoneticWord {
        if let Some(entry) = self.known.with_prefix(key) {
            debug!(word = key, "known pronunciation");
            return entry.clone();
        }
        if options.use_cache {
            if let Some(hit) = self.cached(key) {
                return hit;
            }
        }

        let split = if options.check_prefixes {
            self.split_prefix(key)
        } else {
            None
        };

        match split {
            Some(end) => {
                let (prefix, base) = key.split_at(end);
                debug!(prefix, base, "stripped prefix");
                let mut word = self.resolve(
                    prefix,
                    AnalyzeOptions {
                        check_prefixes: false,
                        ..options
                    },
                );
                word.append(self.resolve_base(base, options));
                word
            }
            None => self.resolve_base(key, options),
        }
    }

    /// Byte offset where the base starts, if a prefix applies.
    fn split_prefix(&self, key: &str) -> Option<usize> {
        let end = self.known.prefixes().longest_prefix(key)?;
        let base = &key[end..];
        // The jenkim belongs to the last letter of the prefix
        if base.is_empty() || base.starts_with(JENKIM) {
            return None;
        }
        Some(end)
    }

    fn resolve_base(&self, base: &str, options: AnalyzeOptions) -> PhoneticWord {
        if let Some(entry) = self.known.base(base) {
            debug!(word = base, "known base pronunciation");
            return entry.clone();
        }
        if options.use_cache {
            if let Some(hit) = self.cached(base) {
                return hit;
            }
        }

        let word = self.transcribe(base);
        if options.use_cache {
            self.cache().insert(base.to_string(), word.clone());
        }
        word
    }

    /// Default table, rule pass and syllable algorithm for one base.
    fn transcribe(&self, base: &str) -> PhoneticWord {
        let chars = normalize_jenkim(&base.chars().collect::<Vec<_>>());
        let mut units: Vec<PhoneticEquivalent> = chars
            .iter()
            .map(|&c| PhoneticEquivalent::new(c, self.table.transcribe(c)))
            .collect();

        let origin = if self.dialect.uses_origin() {
            self.guess_origin(base).language
        } else {
            Language::Unknown
        };
        self.dialect.apply_rules(&mut units, origin);

        let breaks = syllabify(&units);
        trace!(word = base, ?origin, ?breaks, "transcribed");

        let mut word = PhoneticWord::new(units);
        word.set_breaks(breaks);
        word
    }
}

/// Builder for [`Analyzer`]
///
/// Tables left unset fall back to the bundled ones. Passing the same `Arc`s
/// to several builders shares one snapshot between analyzers.
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    dialect: Dialect,
    known: Option<Arc<KnownWords>>,
    lexicon: Option<Arc<LoanLexicon>>,
}

impl AnalyzerBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            known: None,
            lexicon: None,
        }
    }

    /// Use these known pronunciations and prefixes
    pub fn known_words(mut self, known: Arc<KnownWords>) -> Self {
        self.known = Some(known);
        self
    }

    /// Use this loan-word lexicon
    pub fn lexicon(mut self, lexicon: Arc<LoanLexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Load whatever is missing and build the analyzer.
    pub fn build(self) -> Result<Analyzer> {
        let config = load_dialect_config(self.dialect.table_code())?;
        let table = TranscriptionTable::from_config(&config)?;

        let known = match self.known {
            Some(known) => known,
            None => Arc::new(load_known_words()?),
        };
        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => Arc::new(LoanLexicon::bundled()?),
        };

        let word_pattern = Regex::new(WORD_PATTERN)
            .map_err(|e| PhoneticError::ConfigurationError(format!("Invalid word pattern: {e}")))?;

        debug!(
            dialect = self.dialect.code(),
            letters = table.len(),
            known = known.len(),
            lexicon = lexicon.len(),
            "built analyzer"
        );

        Ok(Analyzer {
            dialect: self.dialect,
            table,
            known,
            lexicon,
            word_pattern,
            cache: Mutex::new(HashMap::new()),
        })
    }
}
