//! Argument data model.
//!
//! One reconstructed name/value pair, plus the ordered list produced by a
//! single parse.

/// One recognized command-line argument.
///
/// `name` and `value` are never absent; the empty string is the "missing"
/// representation. Case is preserved as supplied and compared
/// case-insensitively by the query layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    /// Argument name with the delimiter character stripped.
    pub name: String,
    /// Trailing value, trimmed of surrounding whitespace and at most one
    /// pair of wrapping quote characters.
    pub value: String,
    /// True if the value came through a pass-all bracket (or the nesting
    /// pre-processor) and must not be reinterpreted as further argument
    /// boundaries downstream.
    pub full_arg_supplied: bool,
    /// The marker that introduced this argument (`-` or `/`). Absent only
    /// for the argument synthesized by the nesting pre-processor.
    pub delimiter: Option<char>,
}

impl Arg {
    /// New argument opened by a delimiter token.
    pub(crate) fn switch(delimiter: char, name: &str) -> Self {
        Arg {
            name: name.to_string(),
            value: String::new(),
            full_arg_supplied: false,
            delimiter: Some(delimiter),
        }
    }

    /// Synthetic argument holding a verbatim nested command line.
    pub(crate) fn nested(name: &str, payload: &str) -> Self {
        Arg {
            name: name.trim().to_string(),
            value: payload.to_string(),
            full_arg_supplied: true,
            delimiter: None,
        }
    }

    /// Whether this argument carries any name or value content.
    pub(crate) fn has_content(&self) -> bool {
        !self.name.trim().is_empty() || !self.value.trim().is_empty()
    }
}
