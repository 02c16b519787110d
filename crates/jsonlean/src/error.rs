use thiserror::Error;

/// Errors produced while decoding a JSON character stream.
///
/// Decoding is fail-fast: the first problem aborts the decode and is
/// reported synchronously. Diagnostics are deliberately cheap: a message
/// naming the kind of problem, not a position trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An unexpected character, or the stream ended before the value did.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A string ran into a raw control character or the end of the stream
    /// before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A backslash escape with an unsupported escape letter, or a non-hex
    /// character inside a `\uXXXX` sequence.
    #[error("illegal escape character '{0}'")]
    IllegalEscape(char),

    /// A literal that started like `true`, `false`, or `null` but did not
    /// finish that way.
    #[error("invalid literal")]
    InvalidLiteral,

    /// A number token that fails every numeric grammar.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A number token longer than the fixed cap; bounds decode time and
    /// memory against adversarial digit runs.
    #[error("number token too long")]
    NumberTooLong,

    /// Containers nested deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    ExcessiveNesting(usize),
}
