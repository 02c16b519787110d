//! Forward-only character input.

/// A forward-only source of characters for the decoder.
///
/// There is no peek and no pushback: once a character has been read it is
/// gone. When a sub-parser reads one character past the end of its own
/// token, the decoder's cursor slot carries that character to the caller
/// instead of re-reading it.
///
/// Any `Iterator<Item = char>` is a `CharSource`, so `&str` input is just
/// `text.chars()` and chunked or IO-backed inputs are whatever iterator
/// the caller can produce.
pub trait CharSource {
    /// Returns the next character, or `None` once the stream is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}
