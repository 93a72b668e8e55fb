//! Error types for the phonetic engine

use thiserror::Error;

/// Errors raised while building analyzers or loading their resources.
///
/// Lookups never fail: an unknown character degrades to itself and an
/// unknown word goes through the rule pass. Everything here is a
/// construction-time or resource-loading failure.
#[derive(Debug, Error)]
pub enum PhoneticError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unsupported dialect requested
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A known-pronunciation entry could not be parsed
    #[error("Malformed known pronunciation for '{word}': {reason}")]
    MalformedKnownWord {
        /// The table key the entry belongs to
        word: String,
        /// What was wrong with the entry
        reason: String,
    },

    /// A loan-word lexicon line could not be parsed
    #[error("Malformed lexicon line {line}: {reason}")]
    MalformedLexicon {
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The loan-word lexicon could not be read
    #[error("Failed to read lexicon '{path}': {source}")]
    LexiconIo {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A syllable break outside `(0, len)`
    #[error("Invalid syllable break {offset} for word of length {len}")]
    InvalidBreak {
        /// The rejected offset
        offset: usize,
        /// Length of the word
        len: usize,
    },
}

/// Result type for phonetic operations
pub type Result<T> = std::result::Result<T, PhoneticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhoneticError::UnsupportedDialect("sahidic".to_string());
        assert_eq!(err.to_string(), "Unsupported dialect: sahidic");

        let err = PhoneticError::MalformedKnownWord {
            word: "ⲁⲃⲃⲁ".to_string(),
            reason: "missing ','".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed known pronunciation for 'ⲁⲃⲃⲁ': missing ','"
        );

        let err = PhoneticError::InvalidBreak { offset: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid syllable break 4 for word of length 4"
        );
    }

    #[test]
    fn test_lexicon_io_keeps_source() {
        use std::error::Error as _;

        let err = PhoneticError::LexiconIo {
            path: "/missing.tsv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing.tsv"));
        assert!(err.source().is_some());
    }
}
