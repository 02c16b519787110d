//! Narrowed numeric storage for decoded JSON numbers.
//!
//! The decoder stores every number in the smallest representation that
//! reproduces the source literal exactly. Integers narrow through the
//! signed widths and spill into [`BigInt`]; decimals narrow to `f32` when
//! the float's display text round-trips the literal, then `f64`, then
//! [`BigDecimal`]. This is what keeps the in-memory tree small: a document
//! full of small counters costs one byte per number, not eight.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::DecodeError;

/// A JSON number in its narrowest exact representation.
///
/// # Examples
///
/// ```
/// use jsonlean::{Number, Value, decode_str};
///
/// assert_eq!(decode_str("127").unwrap(), Value::Number(Number::I8(127)));
/// assert_eq!(decode_str("128").unwrap(), Value::Number(Number::I16(128)));
/// assert_eq!(decode_str("3.14").unwrap(), Value::Number(Number::F32(3.14)));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// Integer literals outside the 64-bit range.
    BigInt(BigInt),
    F32(f32),
    F64(f64),
    /// Decimal literals that no binary float reproduces exactly.
    BigDecimal(BigDecimal),
}

impl Number {
    /// Classifies a captured number token into its narrowest representation.
    ///
    /// Integer-looking text (no `.`) walks i8 → i16 → i32 → i64 → `BigInt`;
    /// if even `BigInt` rejects it (exponent forms, stray text), the decimal
    /// chain gets a final try. Text with a `.` narrows to the first float
    /// width whose display round-trips the literal, else `BigDecimal`.
    pub(crate) fn from_literal(text: &str) -> Result<Self, DecodeError> {
        if text.contains('.') {
            return Self::from_decimal_literal(text);
        }

        if let Ok(n) = text.parse::<i8>() {
            return Ok(Self::I8(n));
        }
        if let Ok(n) = text.parse::<i16>() {
            return Ok(Self::I16(n));
        }
        if let Ok(n) = text.parse::<i32>() {
            return Ok(Self::I32(n));
        }
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Self::I64(n));
        }
        if let Ok(n) = text.parse::<BigInt>() {
            return Ok(Self::BigInt(n));
        }

        // Not integral after all ("1e3" and friends); the arbitrary-precision
        // decimal is the last resort before rejection.
        BigDecimal::from_str(text)
            .map(Self::BigDecimal)
            .map_err(|_| DecodeError::InvalidNumber(text.to_string()))
    }

    fn from_decimal_literal(text: &str) -> Result<Self, DecodeError> {
        if let Ok(n) = text.parse::<f32>() {
            if n.is_finite() && n.to_string() == text {
                return Ok(Self::F32(n));
            }
        }
        if let Ok(n) = text.parse::<f64>() {
            if n.is_finite() && n.to_string() == text {
                return Ok(Self::F64(n));
            }
        }
        BigDecimal::from_str(text)
            .map(Self::BigDecimal)
            .map_err(|_| DecodeError::InvalidNumber(text.to_string()))
    }

    /// Widens any integer variant that fits into an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I8(n) => Some(i64::from(*n)),
            Self::I16(n) => Some(i64::from(*n)),
            Self::I32(n) => Some(i64::from(*n)),
            Self::I64(n) => Some(*n),
            Self::BigInt(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Widens any fixed-width variant into an `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::I8(n) => Some(f64::from(*n)),
            Self::I16(n) => Some(f64::from(*n)),
            Self::I32(n) => Some(f64::from(*n)),
            Self::I64(n) => Some(*n as f64),
            Self::F32(n) => Some(f64::from(*n)),
            Self::F64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` for the integer variants, including [`BigInt`].
    ///
    /// [`BigInt`]: Number::BigInt
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8(..) | Self::I16(..) | Self::I32(..) | Self::I64(..) | Self::BigInt(..)
        )
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(n) => n.fmt(f),
            Self::I16(n) => n.fmt(f),
            Self::I32(n) => n.fmt(f),
            Self::I64(n) => n.fmt(f),
            Self::BigInt(n) => n.fmt(f),
            Self::F32(n) => n.fmt(f),
            Self::F64(n) => n.fmt(f),
            Self::BigDecimal(n) => n.fmt(f),
        }
    }
}

impl From<i8> for Number {
    fn from(n: i8) -> Self {
        Self::I8(n)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Self::I16(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::I32(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Self::F32(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::F64(n)
    }
}
