//! Header conversion
//!
//! Single pass over the input lines. Definition lines are rewritten into UTF-8
//! string-literal macros, everything else is copied through untouched except a
//! duplicate pragma, and a range summary is appended when anything was rewritten.

use matsym_core::{
    CodePointRange, ConversionResult, ConversionSummary, ConverterConfig, Definition, Error,
    Result,
};
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::pattern::DefinitionMatcher;
use crate::utf8;

/// Converts code-point headers into UTF-8 string-literal headers
pub struct HeaderConverter {
    config: ConverterConfig,
    matcher: DefinitionMatcher,
    line_break: Regex,
}

impl HeaderConverter {
    /// Create a converter with the default configuration
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            matcher: DefinitionMatcher::new(),
            line_break: Regex::new(r"\r\n|\r|\n").expect("line break pattern is a valid regex"),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert header text held in memory
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Terminators of copied lines are
    /// preserved; rewritten and generated lines end with `\n`.
    pub fn convert_source(&self, source: &str) -> Result<ConversionResult> {
        let initial = ConversionResult {
            lines: vec![format!("{}\n\n", self.config.pragma)],
            ..Default::default()
        };

        let mut result = self
            .split_lines(source)
            .into_iter()
            .enumerate()
            .try_fold(initial, |acc, (idx, line)| self.fold_line(acc, line, idx + 1))?;

        if let Some(range) = result.range {
            result.lines.extend(self.range_block(range));
        }

        Ok(result)
    }

    /// Convert header text and return the rendered output
    pub fn render_header(&self, source: &str) -> Result<String> {
        Ok(self.convert_source(source)?.render())
    }

    /// Convert `input` and write the result to `output`
    ///
    /// The output file is left untouched when the input is missing or contains
    /// an invalid code point.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary> {
        let source = read_header(input)?;
        let result = self.convert_source(&source)?;

        std::fs::write(output, result.render()).map_err(|source| Error::OutputWriteFailed {
            path: output.to_path_buf(),
            source,
        })?;

        match result.range {
            Some(range) => info!(
                "Converted {} definitions from {:?} to {:?} ({})",
                result.definitions.len(),
                input,
                output,
                range
            ),
            None => warn!("No code-point definitions found in {:?}", input),
        }

        Ok(ConversionSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            definitions: result.definitions.len(),
            range: result.range,
        })
    }

    /// Split into lines, each keeping its terminator
    fn split_lines<'a>(&self, source: &'a str) -> Vec<&'a str> {
        let mut lines = Vec::new();
        let mut start = 0;
        for m in self.line_break.find_iter(source) {
            lines.push(&source[start..m.end()]);
            start = m.end();
        }
        if start < source.len() {
            lines.push(&source[start..]);
        }
        lines
    }

    fn fold_line(
        &self,
        mut acc: ConversionResult,
        line: &str,
        line_no: usize,
    ) -> Result<ConversionResult> {
        match self.matcher.match_line(line, line_no)? {
            Some(def) => {
                acc.lines.push(self.rewrite(&def)?);
                acc.range = Some(CodePointRange::extend(acc.range, def.code_point));
                acc.definitions.push(def);
            }
            None if line.trim() == self.config.pragma.trim() => {
                debug!("Dropping duplicate pragma on line {}", line_no);
            }
            None => acc.lines.push(line.to_string()),
        }
        Ok(acc)
    }

    fn rewrite(&self, def: &Definition) -> Result<String> {
        let c = utf8::encode_code_point(def.code_point).ok_or_else(|| Error::InvalidCodePoint {
            name: def.name.clone(),
            hex_text: def.hex_text.clone(),
            line: def.line,
        })?;
        let escaped = utf8::escape_char(c);

        debug!("{} U+{:04X} -> \"{}\"", def.name, def.code_point, escaped);
        Ok(format!(
            "#define {} \"{}\"\t// {}\n",
            def.name,
            escaped,
            def.comment()
        ))
    }

    fn range_block(&self, range: CodePointRange) -> [String; 3] {
        [
            format!("\n{}\n", self.config.range_comment),
            format!("#define {} 0x{:04x}\n", self.config.min_macro, range.min),
            format!("#define {} 0x{:04x}\n", self.config.max_macro, range.max),
        ]
    }
}

impl Default for HeaderConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert `input` into `output` with the default configuration
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    HeaderConverter::new().convert(input, output)
}

/// Read a header, mapping a missing file to [`Error::InputNotFound`]
pub fn read_header(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::InputReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })
}
