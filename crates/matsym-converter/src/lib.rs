//! Matsym Converter
//!
//! Turns a header of numeric code-point macros (`#define NAME 0xHEX`) into a header
//! whose macros expand to UTF-8 byte-escaped string literals.
//!
//! ## Modules
//!
//! - `pattern` - Detection of definition lines
//! - `utf8` - UTF-8 encoding and `\xHH` escaping
//! - `convert` - The line fold and file-level conversion

pub mod convert;
pub mod pattern;
pub mod utf8;

pub use convert::{convert, read_header, HeaderConverter};
pub use pattern::DefinitionMatcher;
