//! Matsym Core
//!
//! Core types, errors and configuration shared by the code-point header converter.

pub mod config;
pub mod error;
pub mod types;

pub use config::ConverterConfig;
pub use error::{Error, Result};
pub use types::*;
