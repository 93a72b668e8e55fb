//! Configuration structures and validation
//!
//! This module defines the TOML schema for dialect tables, known
//! pronunciations and respelling tables.

use crate::error::{PhoneticError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// A dialect's default letter → IPA table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialectConfig {
    pub metadata: Metadata,
    pub letters: HashMap<String, String>,
}

impl DialectConfig {
    /// Check metadata and that every key is a single character.
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.is_empty() {
            return Err(PhoneticError::ConfigurationError(
                "dialect code cannot be empty".to_string(),
            ));
        }
        if self.letters.is_empty() {
            return Err(PhoneticError::ConfigurationError(format!(
                "dialect '{}' defines no letters",
                self.metadata.code
            )));
        }
        for key in self.letters.keys() {
            if key.chars().count() != 1 {
                return Err(PhoneticError::ConfigurationError(format!(
                    "letter key '{key}' in dialect '{}' must be a single character",
                    self.metadata.code
                )));
            }
        }
        Ok(())
    }
}

/// Known pronunciations and the prefix list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnownWordsConfig {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub with_prefix: BTreeMap<String, String>,
    #[serde(default)]
    pub base: BTreeMap<String, String>,
}

/// IPA token → display-language spelling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespellingConfig {
    pub metadata: Metadata,
    pub tokens: HashMap<String, String>,
}

impl RespellingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tokens.keys().any(|k| k.is_empty()) {
            return Err(PhoneticError::ConfigurationError(format!(
                "respelling table '{}' has an empty IPA token",
                self.metadata.code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "test"
            name = "Test"

            [letters]
            "ⲁ" = "a"
            "\u0300" = "ə"
        "#;

        let config: DialectConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "test");
        assert_eq!(config.letters["ⲁ"], "a");
        assert_eq!(config.letters["\u{300}"], "ə");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dialect_config_rejects_multichar_key() {
        let toml_str = r#"
            [metadata]
            code = "test"
            name = "Test"

            [letters]
            "ⲟⲩ" = "u"
        "#;

        let config: DialectConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PhoneticError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_known_words_sections_default() {
        let config: KnownWordsConfig = toml::from_str("prefixes = [\"ⲡⲓ\"]").unwrap();
        assert_eq!(config.prefixes, vec!["ⲡⲓ"]);
        assert!(config.with_prefix.is_empty());
        assert!(config.base.is_empty());
    }
}
