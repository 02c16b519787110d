//! A streaming JSON codec with a lean in-memory representation.
//!
//! `jsonlean` decodes a forward-only character stream into a [`Value`] tree
//! and encodes value trees back into JSON text, without any general-purpose
//! parsing machinery. Its defining goal is a minimal per-value memory
//! footprint: every number is stored in the narrowest representation that
//! reproduces the source literal exactly (see [`Number`]).
//!
//! The decoder is a single-pass recursive-descent parser over a
//! no-pushback character source. A one-slot cursor carries the delimiter a
//! sub-parser inevitably reads past the end of its own token, so nothing is
//! ever re-read. Nesting depth is bounded by an explicit, configurable
//! counter ([`DecodeOptions::max_depth`]) rather than by the host stack.
//!
//! # Examples
//!
//! ```rust
//! use jsonlean::{Number, Value, decode_str};
//!
//! let value = decode_str(r#"{"id": 7, "pi": 3.14}"#).unwrap();
//! let map = value.as_object().unwrap();
//! assert_eq!(map["id"], Value::Number(Number::I8(7)));
//! assert_eq!(map["pi"], Value::Number(Number::F32(3.14)));
//! assert_eq!(value.to_string(), r#"{"id":7,"pi":3.14}"#);
//! ```

mod decoder;
mod encode;
mod error;
mod number;
mod options;
mod reader;
mod value;

#[cfg(test)]
mod tests;

pub use decoder::{decode, decode_str, decode_with_options};
pub use encode::{encode_array, encode_object};
pub use error::DecodeError;
pub use number::Number;
pub use options::DecodeOptions;
pub use reader::CharSource;
pub use value::{Array, Map, Value};
