//! Definition line matcher
//!
//! Recognizes `#define NAME 0xHEX` anywhere within a line. The match is not
//! anchored, so indented or prefixed definitions are picked up as well.

use matsym_core::{Definition, Error, Result};
use regex::Regex;

const DEFINITION_PATTERN: &str = r"#define\s+(\w+)\s+0x([0-9a-fA-F]+)";

/// Matches code-point definition lines
pub struct DefinitionMatcher {
    pattern: Regex,
}

impl DefinitionMatcher {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DEFINITION_PATTERN).expect("definition pattern is a valid regex"),
        }
    }

    /// Extract the definition from a line, if it has one
    ///
    /// `line_no` is 1-based and only used for error reporting. A hex value that
    /// does not fit in 32 bits is reported as [`Error::InvalidCodePoint`].
    pub fn match_line(&self, line: &str, line_no: usize) -> Result<Option<Definition>> {
        let Some(caps) = self.pattern.captures(line) else {
            return Ok(None);
        };

        let name = &caps[1];
        let hex_text = &caps[2];
        let code_point =
            u32::from_str_radix(hex_text, 16).map_err(|_| Error::InvalidCodePoint {
                name: name.to_string(),
                hex_text: hex_text.to_string(),
                line: line_no,
            })?;

        Ok(Some(Definition::new(name, hex_text, code_point, line_no)))
    }
}

impl Default for DefinitionMatcher {
    fn default() -> Self {
        Self::new()
    }
}
