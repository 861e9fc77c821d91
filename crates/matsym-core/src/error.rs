//! Error types for the converter

use std::path::PathBuf;
use thiserror::Error;

/// Converter error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("The file '{}' was not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", .path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid code point 0x{hex_text} for {name} on line {line}")]
    InvalidCodePoint {
        name: String,
        hex_text: String,
        line: usize,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;
