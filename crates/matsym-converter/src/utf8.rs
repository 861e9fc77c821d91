//! UTF-8 encoding and C string escaping

use std::fmt::Write;

/// Unicode scalar value for a code point
///
/// Returns `None` for surrogates and values above U+10FFFF, which have no UTF-8 form.
pub fn encode_code_point(code_point: u32) -> Option<char> {
    char::from_u32(code_point)
}

/// Render bytes as consecutive lowercase `\xHH` escapes
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut buffer = String::with_capacity(bytes.len() * 4);
    for byte in bytes {
        let _ = write!(buffer, "\\x{:02x}", byte);
    }
    buffer
}

/// Escaped UTF-8 bytes of a character
pub fn escape_char(c: char) -> String {
    let mut utf8 = [0u8; 4];
    escape_bytes(c.encode_utf8(&mut utf8).as_bytes())
}

/// Decode a run of `\xHH` escapes back into bytes
///
/// Returns `None` if the text is anything other than well-formed escapes.
pub fn unescape(escaped: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(escaped.len() / 4);
    let mut rest = escaped;
    while !rest.is_empty() {
        let digits = rest.strip_prefix("\\x")?.get(..2)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        bytes.push(u8::from_str_radix(digits, 16).ok()?);
        rest = &rest[4..];
    }
    Some(bytes)
}
