//! Data model for header conversion

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A `#define NAME 0xHEX` line extracted from the input header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Macro name, used as-is
    pub name: String,
    /// Hex digits exactly as written in the source (without `0x`)
    pub hex_text: String,
    /// Parsed code point
    pub code_point: u32,
    /// 1-based line number in the input
    pub line: usize,
}

impl Definition {
    pub fn new(
        name: impl Into<String>,
        hex_text: impl Into<String>,
        code_point: u32,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            hex_text: hex_text.into(),
            code_point,
            line,
        }
    }

    /// Trailing annotation for the rewritten line, e.g. `U+3b1`
    pub fn comment(&self) -> String {
        format!("U+{}", self.hex_text.to_lowercase())
    }
}

/// Inclusive range of observed code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRange {
    pub min: u32,
    pub max: u32,
}

impl CodePointRange {
    /// Range covering a single code point
    pub fn new(code_point: u32) -> Self {
        Self {
            min: code_point,
            max: code_point,
        }
    }

    /// Widen the range so that it covers `code_point`
    pub fn include(self, code_point: u32) -> Self {
        Self {
            min: self.min.min(code_point),
            max: self.max.max(code_point),
        }
    }

    /// Extend an optional range, starting one if nothing was seen yet
    pub fn extend(range: Option<Self>, code_point: u32) -> Self {
        match range {
            Some(range) => range.include(code_point),
            None => Self::new(code_point),
        }
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x} - 0x{:04x}", self.min, self.max)
    }
}

/// Output of converting one header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    /// Output lines, each carrying its own terminator
    pub lines: Vec<String>,
    /// Definitions that were rewritten, in input order
    pub definitions: Vec<Definition>,
    /// Extrema of the rewritten code points, `None` if there were none
    pub range: Option<CodePointRange>,
}

impl ConversionResult {
    /// Concatenate the output lines into the final file content
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

/// Outcome of a file conversion, reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub definitions: usize,
    pub range: Option<CodePointRange>,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "Success! Range: {}", range),
            None => write!(f, "Success! No definitions found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_is_lowercased() {
        let def = Definition::new("MATSYM_ALPHA", "3B1", 0x3b1, 1);
        assert_eq!(def.comment(), "U+3b1");
    }

    #[test]
    fn test_range_extend() {
        let range = [0xff, 0x41, 0x3b1]
            .into_iter()
            .fold(None, |acc, cp| Some(CodePointRange::extend(acc, cp)))
            .unwrap();

        assert_eq!(range.min, 0x41);
        assert_eq!(range.max, 0x3b1);
        assert_eq!(range.to_string(), "0x0041 - 0x03b1");
    }

    #[test]
    fn test_summary_display() {
        let mut summary = ConversionSummary {
            input: PathBuf::from("in.h"),
            output: PathBuf::from("out.h"),
            definitions: 2,
            range: Some(CodePointRange { min: 0x41, max: 0xff }),
        };
        assert_eq!(summary.to_string(), "Success! Range: 0x0041 - 0x00ff");

        summary.definitions = 0;
        summary.range = None;
        assert_eq!(summary.to_string(), "Success! No definitions found");
    }

    #[test]
    fn test_summary_json_round_trip() {
        let summary = ConversionSummary {
            input: PathBuf::from("matsym_codepoints.h"),
            output: PathBuf::from("matsym_codepoints_utf8.h"),
            definitions: 3,
            range: Some(CodePointRange { min: 0x3b1, max: 0x1d400 }),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["input"], "matsym_codepoints.h");
        assert_eq!(json["output"], "matsym_codepoints_utf8.h");
        assert_eq!(json["definitions"], 3);
        assert_eq!(json["range"]["min"], 0x3b1);
        assert_eq!(json["range"]["max"], 0x1d400);

        let back: ConversionSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_summary_json_without_range() {
        let summary = ConversionSummary {
            input: PathBuf::from("in.h"),
            output: PathBuf::from("out.h"),
            definitions: 0,
            range: None,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"range\":null"));
        assert_eq!(serde_json::from_str::<ConversionSummary>(&json).unwrap(), summary);
    }

    #[test]
    fn test_result_render() {
        let result = ConversionResult {
            lines: vec!["#pragma once\n\n".into(), "int x;\n".into()],
            definitions: vec![],
            range: None,
        };
        assert_eq!(result.render(), "#pragma once\n\nint x;\n");
    }
}
