//! Fixed-length matching for the `true`, `false`, and `null` literals.

use crate::value::Value;

/// One of the three JSON keyword literals, identified by its first letter.
///
/// The dispatcher consumes the leading `t`, `f`, or `n`; the decoder then
/// matches the fixed [`tail`] character-by-character. No allocation, no
/// lookahead.
///
/// [`tail`]: Literal::tail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// Maps a leading letter to the literal it begins, if any.
    pub fn from_first(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::Null),
            't' => Some(Self::True),
            'f' => Some(Self::False),
            _ => None,
        }
    }

    /// The characters remaining after the leading letter.
    pub fn tail(self) -> &'static str {
        match self {
            Self::Null => "ull",
            Self::True => "rue",
            Self::False => "alse",
        }
    }

    pub fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letters() {
        assert_eq!(Literal::from_first('n'), Some(Literal::Null));
        assert_eq!(Literal::from_first('t'), Some(Literal::True));
        assert_eq!(Literal::from_first('f'), Some(Literal::False));
        assert_eq!(Literal::from_first('x'), None);
    }

    #[test]
    fn tails_reassemble_the_keywords() {
        assert_eq!(format!("n{}", Literal::Null.tail()), "null");
        assert_eq!(format!("t{}", Literal::True.tail()), "true");
        assert_eq!(format!("f{}", Literal::False.tail()), "false");
    }
}
