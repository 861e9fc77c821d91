//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Converter configuration
///
/// The defaults produce the canonical `matsym_codepoints_utf8.h` layout. Any key
/// missing from a configuration file falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Include-guard directive emitted at the top and dropped from the body
    pub pragma: String,

    /// Comment line introducing the range summary block
    pub range_comment: String,

    /// Macro receiving the smallest code point
    pub min_macro: String,

    /// Macro receiving the largest code point
    pub max_macro: String,

    /// Input header used when none is given on the command line
    pub default_input: PathBuf,

    /// Output header used when none is given on the command line
    pub default_output: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pragma: "#pragma once".into(),
            range_comment: "// Range Information".into(),
            min_macro: "MATSYM_MIN_CODEPOINT".into(),
            max_macro: "MATSYM_MAX_CODEPOINT".into(),
            default_input: PathBuf::from("matsym_codepoints.h"),
            default_output: PathBuf::from("matsym_codepoints_utf8.h"),
        }
    }
}

impl ConverterConfig {
    /// Parse a JSON configuration and validate it
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                Error::Config(format!("config file '{}' not found", path.display()))
            }
            _ => Error::Io(e),
        })?;
        Self::from_json_str(&text)
    }

    /// Check that the emitted directives are well-formed
    pub fn validate(&self) -> Result<()> {
        if self.pragma.trim().is_empty() {
            return Err(Error::Config("pragma must not be empty".into()));
        }
        if self.pragma != self.pragma.trim() {
            return Err(Error::Config(
                "pragma must not have leading or trailing whitespace".into(),
            ));
        }

        for name in [&self.min_macro, &self.max_macro] {
            if !is_c_identifier(name) {
                return Err(Error::Config(format!("'{}' is not a valid macro name", name)));
            }
        }

        Ok(())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
