//! Encoding value trees back into JSON text.
//!
//! The encoder walks a [`Value`] tree and writes compact JSON. Its escape
//! table is the decoder's table run in reverse, plus forced escaping of
//! `/` and of every character in the control, Latin-1-supplement control,
//! and general-punctuation ranges as uppercase `\uXXXX` sequences.

use std::fmt::{self, Write};

use crate::value::{Map, Value};

/// Encodes an object mapping as JSON text.
///
/// Key order is the map's own iteration order.
///
/// # Examples
///
/// ```rust
/// use jsonlean::{Map, Value, encode_object};
///
/// let mut map = Map::new();
/// map.insert("a".to_string(), Value::Null);
/// assert_eq!(encode_object(&map), r#"{"a":null}"#);
/// ```
#[must_use]
pub fn encode_object(map: &Map) -> String {
    let mut out = String::new();
    write_object(map, &mut out).expect("writing JSON to a String cannot fail");
    out
}

/// Encodes an array of values as JSON text.
///
/// # Examples
///
/// ```rust
/// use jsonlean::{Value, encode_array};
///
/// let items = vec![Value::Bool(true), Value::Null];
/// assert_eq!(encode_array(&items), "[true,null]");
/// ```
#[must_use]
pub fn encode_array(items: &[Value]) -> String {
    let mut out = String::new();
    write_array(items, &mut out).expect("writing JSON to a String cannot fail");
    out
}

/// Writes `src` with the encoder's escape table applied.
///
/// The short escapes take precedence over the `\uXXXX` form for the
/// control characters they cover.
pub(crate) fn write_escaped<W: Write>(src: &str, out: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '/' => out.write_str("\\/")?,
            '\u{0008}' => out.write_str("\\b")?,
            '\u{000C}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if needs_unicode_escape(c) => write!(out, "\\u{:04X}", u32::from(c))?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Control characters, the Latin-1-supplement control block, and the
/// general-punctuation block are never emitted raw.
fn needs_unicode_escape(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' | '\u{2000}'..='\u{20FF}'
    )
}

fn write_value<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => {
            out.write_char('"')?;
            write_escaped(s, out)?;
            out.write_char('"')
        }
        Value::Array(items) => write_array(items, out),
        Value::Object(map) => write_object(map, out),
    }
}

fn write_array<W: Write>(items: &[Value], out: &mut W) -> fmt::Result {
    out.write_char('[')?;
    let mut first = true;
    for item in items {
        if !first {
            out.write_char(',')?;
        }
        first = false;
        write_value(item, out)?;
    }
    out.write_char(']')
}

fn write_object<W: Write>(map: &Map, out: &mut W) -> fmt::Result {
    out.write_char('{')?;
    let mut first = true;
    for (key, value) in map {
        if !first {
            out.write_char(',')?;
        }
        first = false;
        out.write_char('"')?;
        write_escaped(key, out)?;
        out.write_str("\":")?;
        write_value(value, out)?;
    }
    out.write_char('}')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}
