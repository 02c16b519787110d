/// Configuration options for a decode call.
///
/// # Examples
///
/// ```rust
/// use jsonlean::{DecodeOptions, decode_with_options};
///
/// let options = DecodeOptions { max_depth: 16 };
/// let value = decode_with_options("[[1],[2]]".chars(), options).unwrap();
/// assert!(value.is_array());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Maximum container nesting depth before the decode fails with
    /// [`DecodeError::ExcessiveNesting`].
    ///
    /// The limit is an explicit counter, not a property of the host call
    /// stack: a document nested deeper than this produces a typed error
    /// instead of exhausting native stack space.
    ///
    /// # Default
    ///
    /// `512`
    ///
    /// [`DecodeError::ExcessiveNesting`]: crate::DecodeError::ExcessiveNesting
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}
