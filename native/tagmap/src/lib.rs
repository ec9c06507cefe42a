//! TagMap - restricted XML to nested maps
//!
//! Converts documents made only of paired tags (`<k>v</k>`, nested freely)
//! into nested maps. Malformed input yields an empty map; `parse_strict`
//! reports why instead.
//!
//! Entry points:
//! - parse: single document, empty map on failure
//! - parse_strict: single document, `{:ok, map}` or `{:error, {kind, position}}`
//! - parse_many: batch of documents parsed in parallel

use rustler::{Binary, Env, NifResult, Term};

pub mod core;
pub mod error;
pub mod strategy;
mod term;
pub mod tree;

pub use error::{ErrorKind, StructuralError};
pub use tree::{parse_map, to_xml, try_parse_map, TagMap, TagValue};

use term::{map_to_term, maps_to_list, result_to_term};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Single Document
// ============================================================================

/// Parse a document into a nested map (`%{}` if malformed)
#[rustler::nif]
fn parse<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    let map = tree::parse_bytes(input.as_slice());
    map_to_term(env, &map)
}

/// Parse a document, returning {:ok, map} or {:error, {kind, position}}
#[rustler::nif]
fn parse_strict<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    let result = tree::try_parse_bytes(input.as_slice());
    result_to_term(env, &result)
}

// ============================================================================
// Batch
// ============================================================================

/// Parse many documents in parallel, one map per document in input order
#[rustler::nif(schedule = "DirtyCpu")]
fn parse_many<'a>(env: Env<'a>, inputs: Vec<Binary<'a>>) -> NifResult<Term<'a>> {
    let documents: Vec<&[u8]> = inputs.iter().map(|input| input.as_slice()).collect();
    let maps = strategy::parse_many(&documents);
    maps_to_list(env, &maps)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.TagMap.Native");
