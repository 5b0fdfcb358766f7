//! The configuration document handed to the QNN backend.
//!
//! The document is a single-line flat object of string pairs:
//! `{"key":"value","key2":"value2"}`. No whitespace is emitted and entry order
//! follows the order of the input.
//!
//! Keys and values are written without escaping, and read back the same way:
//! a backslash is an ordinary character, and a string ends at the next `"`.
//! A value containing a quote therefore produces a document the backend
//! cannot read.

use crate::error::{QnnError, Result};
use indexmap::IndexMap;

/// The document for an empty configuration.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Render key/value pairs into a configuration document.
pub fn to_document<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::from("{");
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\":\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('}');
    out
}

/// Read a configuration document back into ordered key/value pairs.
///
/// Whitespace between tokens is tolerated. Nested objects, arrays and
/// non-string values are rejected. A key given twice keeps its last value
/// in its first position.
pub fn parse_document(text: &str) -> Result<IndexMap<String, String>> {
    let mut entries = IndexMap::new();
    scan_document(text, |key, value| {
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    })?;
    Ok(entries)
}

/// Walk every key/value pair of a document in order, duplicates included.
///
/// Scanning stops at the first error returned by `on_entry`.
pub fn scan_document<F>(text: &str, mut on_entry: F) -> Result<()>
where
    F: FnMut(&str, &str) -> Result<()>,
{
    let mut scanner = Scanner { text, pos: 0 };

    scanner.expect(b'{')?;
    if scanner.peek() == Some(b'}') {
        scanner.pos += 1;
        return scanner.finish();
    }

    loop {
        let key = scanner.string("key")?;
        scanner.expect(b':')?;
        let value = match scanner.peek() {
            Some(b'"') => scanner.string("value")?,
            Some(b'{') | Some(b'[') => {
                return Err(malformed(format!("value for '{}' must not be nested", key)));
            }
            _ => {
                return Err(malformed(format!("value for '{}' must be a string", key)));
            }
        };
        on_entry(key, value)?;

        match scanner.next_token() {
            Some(b',') => continue,
            Some(b'}') => return scanner.finish(),
            Some(other) => {
                return Err(malformed(format!(
                    "expected ',' or '}}' at byte {}, found '{}'",
                    scanner.pos - 1,
                    other as char
                )));
            }
            None => return Err(malformed("missing closing '}'".to_string())),
        }
    }
}

fn malformed(message: String) -> QnnError {
    QnnError::MalformedDocument(message)
}

/// Byte cursor over a document. Every delimiter is ASCII, so slicing at
/// delimiter positions always lands on a char boundary.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && matches!(bytes[self.pos], b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    /// Next non-whitespace byte, without consuming it.
    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Next non-whitespace byte, consumed.
    fn next_token(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn expect(&mut self, wanted: u8) -> Result<()> {
        match self.next_token() {
            Some(byte) if byte == wanted => Ok(()),
            Some(byte) => Err(malformed(format!(
                "expected '{}' at byte {}, found '{}'",
                wanted as char,
                self.pos - 1,
                byte as char
            ))),
            None => Err(malformed(format!(
                "expected '{}' but the document ended",
                wanted as char
            ))),
        }
    }

    /// A quote-delimited string, taken verbatim up to the next quote.
    fn string(&mut self, what: &str) -> Result<&'a str> {
        self.expect(b'"').map_err(|_| {
            malformed(format!("expected a quoted {} at byte {}", what, self.pos))
        })?;
        let start = self.pos;
        let len = self.text[start..]
            .find('"')
            .ok_or_else(|| malformed(format!("unterminated {} starting at byte {}", what, start)))?;
        self.pos = start + len + 1;
        Ok(&self.text[start..start + len])
    }

    /// Only whitespace may follow the closing brace.
    fn finish(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(byte) => Err(malformed(format!(
                "unexpected '{}' after closing '}}' at byte {}",
                byte as char, self.pos
            ))),
        }
    }
}
