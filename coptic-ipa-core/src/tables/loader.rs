//! Embedded table loading
//!
//! Every bundled table is compiled into the binary with `include_str!` and
//! parsed on demand. Nothing is cached globally: callers build a snapshot
//! once and share it.

use super::config::{DialectConfig, RespellingConfig};
use super::known::KnownWords;
use crate::error::{PhoneticError, Result};

macro_rules! embed_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const DIALECT_CONFIGS: [(&str, &str); 2] = [
    embed_config!(
        "greco-bohairic",
        "../../configs/dialects/greco_bohairic.toml"
    ),
    embed_config!("old-bohairic", "../../configs/dialects/old_bohairic.toml"),
];

const RESPELLING_CONFIGS: [(&str, &str); 2] = [
    embed_config!("en", "../../configs/respelling/english.toml"),
    embed_config!("ar", "../../configs/respelling/arabic.toml"),
];

const KNOWN_WORDS: &str = include_str!("../../configs/known_words.toml");

fn find_embedded<'a>(table: &[(&str, &'a str)], code: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, content)| *content)
}

/// Parse the bundled letter table for a dialect code.
pub fn load_dialect_config(code: &str) -> Result<DialectConfig> {
    let content = find_embedded(&DIALECT_CONFIGS, code)
        .ok_or_else(|| PhoneticError::UnsupportedDialect(code.to_string()))?;

    let config: DialectConfig = toml::from_str(content).map_err(|e| {
        PhoneticError::ConfigurationError(format!("Failed to parse {code} config: {e}"))
    })?;

    // Validate that the config code matches
    if config.metadata.code != code {
        return Err(PhoneticError::ConfigurationError(format!(
            "Config code mismatch: expected {}, got {}",
            code, config.metadata.code
        )));
    }

    config.validate()?;
    Ok(config)
}

/// Parse the bundled respelling table for a display-language code.
pub fn load_respelling_config(code: &str) -> Result<RespellingConfig> {
    let content = find_embedded(&RESPELLING_CONFIGS, code).ok_or_else(|| {
        PhoneticError::ConfigurationError(format!("No respelling table for '{code}'"))
    })?;

    let config: RespellingConfig = toml::from_str(content).map_err(|e| {
        PhoneticError::ConfigurationError(format!("Failed to parse {code} respelling: {e}"))
    })?;

    if config.metadata.code != code {
        return Err(PhoneticError::ConfigurationError(format!(
            "Config code mismatch: expected {}, got {}",
            code, config.metadata.code
        )));
    }

    config.validate()?;
    Ok(config)
}

/// Parse the bundled known-pronunciation tables.
pub fn load_known_words() -> Result<KnownWords> {
    KnownWords::from_toml_str(KNOWN_WORDS)
}

/// Codes of the bundled dialect tables.
pub fn list_dialect_tables() -> Vec<&'static str> {
    DIALECT_CONFIGS.iter().map(|(code, _)| *code).collect()
}

/// Codes of the bundled respelling tables.
pub fn list_respelling_tables() -> Vec<&'static str> {
    RESPELLING_CONFIGS.iter().map(|(code, _)| *code).collect()
}
