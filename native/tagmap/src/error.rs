//! Structural error taxonomy
//!
//! Every failure in the descent is one of these kinds, tagged with the byte
//! offset where it was detected. The default entry points collapse all of
//! them into an empty map; the `try_*` functions hand them back.

use std::fmt;

/// Kind of structural failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is shorter than `<k>v</k>` or does not begin with `<`
    TooShortOrUnopened,
    /// A `<` with no following `>`
    MissingTagName,
    /// The opening or closing literal for a tag name is absent
    UnmatchedClosingTag,
    /// Text after a closed tag that is not another tag
    InvalidNesting,
    /// Input bytes are not valid UTF-8 / UTF-16 text
    InvalidEncoding,
}

impl ErrorKind {
    /// Snake-case name, also used as the Elixir atom
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TooShortOrUnopened => "too_short_or_unopened",
            ErrorKind::MissingTagName => "missing_tag_name",
            ErrorKind::UnmatchedClosingTag => "unmatched_closing_tag",
            ErrorKind::InvalidNesting => "invalid_nesting",
            ErrorKind::InvalidEncoding => "invalid_encoding",
        }
    }
}

/// A structural failure and where it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralError {
    pub kind: ErrorKind,
    /// Byte offset into the decoded document
    pub position: usize,
}

impl StructuralError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        StructuralError { kind, position }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.kind {
            ErrorKind::TooShortOrUnopened => "document too short or not opened with '<'",
            ErrorKind::MissingTagName => "no valid tag name found",
            ErrorKind::UnmatchedClosingTag => "no valid closing tag found",
            ErrorKind::InvalidNesting => "invalid tag nesting",
            ErrorKind::InvalidEncoding => "input is not valid text",
        };
        write!(f, "{} at byte {}", message, self.position)
    }
}

impl std::error::Error for StructuralError {}

/// Result alias used throughout the parser
pub type Result<T> = std::result::Result<T, StructuralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = StructuralError::new(ErrorKind::UnmatchedClosingTag, 12);
        assert_eq!(err.to_string(), "no valid closing tag found at byte 12");
    }

    #[test]
    fn test_kind_names_are_atoms() {
        assert_eq!(ErrorKind::InvalidNesting.as_str(), "invalid_nesting");
        assert_eq!(ErrorKind::TooShortOrUnopened.as_str(), "too_short_or_unopened");
    }
}
