//! Parallel Batch Parsing
//!
//! Uses Rayon to parse many independent documents at once. Each document
//! keeps its own all-or-nothing result; order follows the input.

use rayon::prelude::*;

use crate::error::Result;
use crate::tree::{parse_bytes, try_parse_bytes, TagMap};

/// Parse multiple documents in parallel, empty maps for malformed ones
pub fn parse_many(documents: &[&[u8]]) -> Vec<TagMap> {
    documents.par_iter().map(|doc| parse_bytes(doc)).collect()
}

/// Parse multiple documents in parallel, keeping each failure
pub fn try_parse_many(documents: &[&[u8]]) -> Vec<Result<TagMap>> {
    documents.par_iter().map(|doc| try_parse_bytes(doc)).collect()
}
