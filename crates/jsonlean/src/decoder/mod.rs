//! The streaming JSON decoder.
//!
//! One pass, one character of effective lookahead, no pushback. A
//! recursive-descent [`Decoder`] walks the stream: the dispatcher
//! classifies the next significant character and hands off to the matching
//! leaf parser (string, number, literal) or container parser (object,
//! array). Sub-parsers that must read one character past their own token
//! to find its end deposit that character into the shared cursor slot, and
//! the caller consumes it from there instead of re-reading the stream.
//!
//! # Examples
//!
//! ```rust
//! use jsonlean::{Value, decode_str};
//!
//! let value = decode_str(r#"{"key": [null, true, 3.14]}"#).unwrap();
//! assert!(value.is_object());
//! ```

mod escape;
mod literal;

use escape::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate, is_low_surrogate};
use literal::Literal;

use crate::{
    error::DecodeError,
    number::Number,
    options::DecodeOptions,
    reader::CharSource,
    value::{Map, Value},
};

/// Longest accepted number token. Bounds decode time and memory against
/// adversarial inputs such as an unbounded digit run.
const MAX_NUMBER_LEN: usize = 1000;

/// Decodes a complete JSON document from a string slice.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the input is empty, malformed, or nested
/// deeper than the default depth limit.
///
/// # Examples
///
/// ```rust
/// use jsonlean::{Number, Value, decode_str};
///
/// assert_eq!(decode_str("[127]").unwrap(), Value::Array(vec![Value::Number(Number::I8(127))]));
/// ```
pub fn decode_str(text: &str) -> Result<Value, DecodeError> {
    decode(text.chars())
}

/// Decodes a complete JSON document from a forward-only character source.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the input is empty, malformed, or nested
/// deeper than the default depth limit.
pub fn decode<S: CharSource>(source: S) -> Result<Value, DecodeError> {
    decode_with_options(source, DecodeOptions::default())
}

/// Decodes a complete JSON document with explicit [`DecodeOptions`].
///
/// # Errors
///
/// Returns a [`DecodeError`] if the input is empty, malformed, or nested
/// deeper than `options.max_depth`.
pub fn decode_with_options<S: CharSource>(
    source: S,
    options: DecodeOptions,
) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(source, options);
    match decoder.dispatch()? {
        Parsed::Value(value) => Ok(value),
        Parsed::ArrayEnd => Err(invalid_char(']')),
    }
}

/// Outcome of one dispatch step.
///
/// `ArrayEnd` stands in for a `]` found where a value was expected. Only
/// the array parser treats it as "this array is empty"; every other call
/// site converts it into a malformed-input error. This replaces a peeked
/// character: the `]` has already been consumed by the time the array
/// parser learns about it.
enum Parsed {
    Value(Value),
    ArrayEnd,
}

struct Decoder<S> {
    source: S,
    /// The last structurally significant character a sub-parser read past
    /// the end of its own token. The caller takes it from here; nothing is
    /// ever pushed back into the source.
    cursor: Option<char>,
    depth: usize,
    max_depth: usize,
}

impl<S: CharSource> Decoder<S> {
    fn new(source: S, options: DecodeOptions) -> Self {
        Self {
            source,
            cursor: None,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Classifies the next significant character and parses one value.
    fn dispatch(&mut self) -> Result<Parsed, DecodeError> {
        let c = self.next_significant().ok_or_else(invalid_eof)?;
        match c {
            '"' => self.parse_string().map(Value::String).map(Parsed::Value),
            '{' => self.parse_object().map(Parsed::Value),
            '[' => self.parse_array().map(Parsed::Value),
            ']' => Ok(Parsed::ArrayEnd),
            c if c == '+' || c == '-' || c.is_ascii_digit() => {
                self.parse_number(c).map(Parsed::Value)
            }
            c => match Literal::from_first(c) {
                Some(lit) => self.parse_literal(lit).map(Parsed::Value),
                None => Err(invalid_char(c)),
            },
        }
    }

    /// Takes the cursor if it is loaded, otherwise reads forward past
    /// whitespace. `None` means the stream ended first.
    fn next_significant(&mut self) -> Option<char> {
        if let Some(c) = self.cursor.take() {
            return Some(c);
        }
        loop {
            match self.source.next_char() {
                Some(c) if is_json_whitespace(c) => {}
                other => return other,
            }
        }
    }

    // ---------------------------------------------------------------------
    // Leaf parsers
    // ---------------------------------------------------------------------

    /// Parses a string body. The opening quote is already consumed; on
    /// return the source is positioned exactly past the closing quote.
    fn parse_string(&mut self) -> Result<String, DecodeError> {
        let mut out = String::new();
        // A decoded high surrogate waiting for its low half. Flushed as
        // U+FFFD if anything other than a low-surrogate escape follows.
        let mut pending_high: Option<u16> = None;

        loop {
            let c = self
                .source
                .next_char()
                .ok_or(DecodeError::UnterminatedString)?;
            match c {
                '"' => {
                    if pending_high.take().is_some() {
                        out.push(char::REPLACEMENT_CHARACTER);
                    }
                    return Ok(out);
                }
                '\\' => {
                    let esc = self
                        .source
                        .next_char()
                        .ok_or(DecodeError::UnterminatedString)?;
                    if esc == 'u' {
                        let unit = self.read_escape_unit()?;
                        match pending_high.take() {
                            Some(high) if is_low_surrogate(unit) => {
                                out.push(combine_surrogates(high, unit));
                            }
                            stale => {
                                if stale.is_some() {
                                    out.push(char::REPLACEMENT_CHARACTER);
                                }
                                if is_high_surrogate(unit) {
                                    pending_high = Some(unit);
                                } else if is_low_surrogate(unit) {
                                    out.push(char::REPLACEMENT_CHARACTER);
                                } else {
                                    out.push(
                                        char::from_u32(u32::from(unit))
                                            .unwrap_or(char::REPLACEMENT_CHARACTER),
                                    );
                                }
                            }
                        }
                        continue;
                    }
                    if pending_high.take().is_some() {
                        out.push(char::REPLACEMENT_CHARACTER);
                    }
                    out.push(match esc {
                        'b' => '\u{0008}',
                        't' => '\t',
                        'n' => '\n',
                        'f' => '\u{000C}',
                        'r' => '\r',
                        '"' => '"',
                        '\'' => '\'',
                        '\\' => '\\',
                        '/' => '/',
                        other => return Err(DecodeError::IllegalEscape(other)),
                    });
                }
                // A raw line break or NUL means the closing quote was lost.
                '\0' | '\n' | '\r' => return Err(DecodeError::UnterminatedString),
                c => {
                    if pending_high.take().is_some() {
                        out.push(char::REPLACEMENT_CHARACTER);
                    }
                    out.push(c);
                }
            }
        }
    }

    /// Reads the four hex digits after `\u` into one UTF-16 code unit.
    fn read_escape_unit(&mut self) -> Result<u16, DecodeError> {
        let mut buf = UnicodeEscapeBuffer::new();
        loop {
            let c = self
                .source
                .next_char()
                .ok_or(DecodeError::UnterminatedString)?;
            match buf.feed(c) {
                Ok(Some(unit)) => return Ok(unit),
                Ok(None) => {}
                Err(bad) => return Err(DecodeError::IllegalEscape(bad)),
            }
        }
    }

    /// Parses a number whose first character (sign or digit) the
    /// dispatcher already consumed. The terminator (`,`, `}`, or `]`) is
    /// not part of the token and lands in the cursor.
    fn parse_number(&mut self, first: char) -> Result<Value, DecodeError> {
        let mut text = String::new();
        text.push(first);
        loop {
            match self.source.next_char() {
                None => break,
                Some(c @ (',' | '}' | ']')) => {
                    self.cursor = Some(c);
                    break;
                }
                Some(c) => {
                    if text.len() >= MAX_NUMBER_LEN {
                        return Err(DecodeError::NumberTooLong);
                    }
                    text.push(c);
                }
            }
        }
        Number::from_literal(text.trim()).map(Value::Number)
    }

    /// Matches the fixed tail of `true`, `false`, or `null`.
    fn parse_literal(&mut self, lit: Literal) -> Result<Value, DecodeError> {
        for expected in lit.tail().chars() {
            if self.source.next_char() != Some(expected) {
                return Err(DecodeError::InvalidLiteral);
            }
        }
        Ok(lit.value())
    }

    // ---------------------------------------------------------------------
    // Container parsers
    // ---------------------------------------------------------------------

    /// Parses an object body, the `{` already consumed.
    ///
    /// Anything before the first key, or between a value and the next key,
    /// that is not a `"` or `}` is silently discarded. A malformed
    /// stretch can therefore yield a truncated or empty object instead of
    /// an error; that leniency is part of the decoder's contract.
    fn parse_object(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut map = Map::new();
        loop {
            if self.scan_object_delimiter()? == '}' {
                break;
            }
            // The delimiter was the opening quote of the next key.
            let key = self.parse_string()?;
            match self.next_significant() {
                Some(':') => {}
                Some(c) => return Err(invalid_char(c)),
                None => return Err(invalid_eof()),
            }
            let value = match self.dispatch()? {
                Parsed::Value(v) => v,
                Parsed::ArrayEnd => return Err(invalid_char(']')),
            };
            // Last write wins on duplicate keys.
            map.insert(key, value);
        }
        self.leave();
        self.park_past_close();
        Ok(Value::Object(map))
    }

    /// Scans forward to the next `"` or `}`, discarding everything else.
    fn scan_object_delimiter(&mut self) -> Result<char, DecodeError> {
        if let Some(c) = self.cursor.take() {
            if c == '"' || c == '}' {
                return Ok(c);
            }
            // A `,` or stray character deposited by a value parser is
            // discarded like any other insignificant stretch.
        }
        loop {
            match self.source.next_char() {
                None => return Err(invalid_eof()),
                Some(c @ ('"' | '}')) => return Ok(c),
                Some(_) => {}
            }
        }
    }

    /// Leaves the reader positioned after the whitespace that follows a
    /// closing brace: the next significant character, if the stream has
    /// one, is loaded into the cursor for the parent to consume.
    fn park_past_close(&mut self) {
        debug_assert!(self.cursor.is_none());
        self.cursor = loop {
            match self.source.next_char() {
                Some(c) if is_json_whitespace(c) => {}
                other => break other,
            }
        };
    }

    /// Parses an array body, the `[` already consumed.
    fn parse_array(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut items = Vec::new();

        match self.dispatch()? {
            Parsed::ArrayEnd => {
                self.leave();
                return Ok(Value::Array(items));
            }
            Parsed::Value(v) => items.push(v),
        }

        loop {
            let delim = match self.cursor.take() {
                // The previous value parser already deposited the
                // delimiter; no need to scan again.
                Some(c) => c,
                None => loop {
                    match self.source.next_char() {
                        None => return Err(invalid_eof()),
                        Some(c) if is_json_whitespace(c) => {}
                        Some(c) => break c,
                    }
                },
            };
            match delim {
                ',' => match self.dispatch()? {
                    Parsed::Value(v) => items.push(v),
                    Parsed::ArrayEnd => return Err(invalid_char(']')),
                },
                ']' => break,
                c => return Err(invalid_char(c)),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    // ---------------------------------------------------------------------
    // Depth guard
    // ---------------------------------------------------------------------

    fn enter(&mut self) -> Result<(), DecodeError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DecodeError::ExcessiveNesting(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn invalid_char(c: char) -> DecodeError {
    DecodeError::MalformedInput(format!("invalid character '{c}'"))
}

fn invalid_eof() -> DecodeError {
    DecodeError::MalformedInput("unexpected end of input".to_string())
}
