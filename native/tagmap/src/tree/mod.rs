//! Tag Tree Module - restricted XML to nested maps
//!
//! Documents are paired tags only: no attributes, no self-closing tags, no
//! escaping, and a tag holds either text or child tags, never both.
//!
//! Parsing is all-or-nothing. `parse_map` returns an empty map for any
//! malformed input; `try_parse_map` returns the same result but reports
//! the failure instead of hiding it.

pub mod parser;
pub mod serialize;
pub mod span;
pub mod value;

pub use parser::TagParser;
pub use serialize::to_xml;
pub use span::Span;
pub use value::{TagMap, TagValue};

use crate::core::encoding::decode_text;
use crate::error::{ErrorKind, Result, StructuralError};

/// Shortest document that can be well formed: `<k>v</k>`
pub const MIN_DOCUMENT_LEN: usize = 8;

/// Parse a document, or an empty map if it is malformed
pub fn parse_map(input: &str) -> TagMap {
    try_parse_map(input).unwrap_or_default()
}

/// Parse a document, reporting why it is malformed
pub fn try_parse_map(input: &str) -> Result<TagMap> {
    // Counted in chars; the byte length alone would accept short multibyte text
    if !input.starts_with('<') || input.chars().nth(MIN_DOCUMENT_LEN - 1).is_none() {
        return Err(StructuralError::new(ErrorKind::TooShortOrUnopened, 0));
    }
    TagParser::new(input).parse_document()
}

/// Decode raw bytes and parse them, or an empty map on any failure
pub fn parse_bytes(input: &[u8]) -> TagMap {
    try_parse_bytes(input).unwrap_or_default()
}

/// Decode raw bytes and parse them, reporting the failure
pub fn try_parse_bytes(input: &[u8]) -> Result<TagMap> {
    let text = decode_text(input)?;
    try_parse_map(&text)
}
