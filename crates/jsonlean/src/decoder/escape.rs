//! Buffering and decoding of four-digit Unicode escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal
//! digits following a `\u` and yields the resulting UTF-16 code unit. The
//! string parser owns surrogate handling: adjacent high/low escapes combine
//! into one scalar via [`combine_surrogates`], unpaired halves degrade to
//! U+FFFD.

/// Accumulator for the four hex digits of a `\uXXXX` escape.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    value: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one character of the escape.
    ///
    /// Returns `Ok(None)` while fewer than four digits have been seen,
    /// `Ok(Some(unit))` on the fourth, and `Err` with the offending
    /// character if it is not an ASCII hex digit.
    pub fn feed(&mut self, c: char) -> Result<Option<u16>, char> {
        let Some(digit) = c.to_digit(16) else {
            return Err(c);
        };
        debug_assert!(self.len < 4);
        self.value = (self.value << 4) | digit as u16;
        self.len += 1;
        if self.len == 4 {
            let unit = self.value;
            self.value = 0;
            self.len = 0;
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a surrogate pair into the scalar it encodes.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> char {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    // Pairs always land in U+10000..=U+10FFFF, which is valid scalar range.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
