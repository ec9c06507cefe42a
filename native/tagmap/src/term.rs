//! Elixir Term Conversion Utilities
//!
//! Converts parse results to Elixir terms: maps become maps with binary
//! keys, leaves become binaries, failures become `{:error, {kind, position}}`.

use std::collections::hash_map;

use rustler::types::atom::Atom;
use rustler::{Encoder, Env, NewBinary, NifResult, Term};

use crate::error::{Result, StructuralError};
use crate::tree::{TagMap, TagValue};

rustler::atoms! {
    ok,
    error,
}

/// A map whose entries are being converted
struct Level<'m, 'a> {
    entries: hash_map::Iter<'m, String, TagValue>,
    pairs: Vec<(Term<'a>, Term<'a>)>,
    /// Key under which the finished map goes into its parent
    name: Option<&'m str>,
}

impl<'m, 'a> Level<'m, 'a> {
    fn new(map: &'m TagMap, name: Option<&'m str>) -> Self {
        Level {
            entries: map.iter(),
            pairs: Vec::with_capacity(map.len()),
            name,
        }
    }
}

/// Convert a tag map to an Elixir map
/// Builds maps bottom-up with an explicit stack so deep trees do not recurse
pub fn map_to_term<'a>(env: Env<'a>, map: &TagMap) -> NifResult<Term<'a>> {
    let mut stack: Vec<Level<'_, 'a>> = Vec::new();
    let mut current = Level::new(map, None);

    loop {
        match current.entries.next() {
            Some((name, TagValue::Leaf(text))) => {
                current.pairs.push((str_to_binary(env, name), str_to_binary(env, text)));
            }
            Some((name, TagValue::Map(children))) => {
                let child = Level::new(children, Some(name));
                stack.push(std::mem::replace(&mut current, child));
            }
            None => {
                let term = Term::map_from_pairs(env, &current.pairs)?;
                match (current.name, stack.pop()) {
                    (Some(name), Some(parent)) => {
                        current = parent;
                        current.pairs.push((str_to_binary(env, name), term));
                    }
                    _ => return Ok(term),
                }
            }
        }
    }
}

/// Convert a single value: binary for leaves, map for nested tags
pub fn value_to_term<'a>(env: Env<'a>, value: &TagValue) -> NifResult<Term<'a>> {
    match value {
        TagValue::Leaf(text) => Ok(str_to_binary(env, text)),
        TagValue::Map(map) => map_to_term(env, map),
    }
}

/// `{:error, {kind, position}}`
pub fn error_to_term<'a>(env: Env<'a>, err: &StructuralError) -> NifResult<Term<'a>> {
    let kind = Atom::from_str(env, err.kind.as_str())?;
    Ok((error(), (kind, err.position)).encode(env))
}

/// `{:ok, map}` or `{:error, {kind, position}}`
pub fn result_to_term<'a>(env: Env<'a>, result: &Result<TagMap>) -> NifResult<Term<'a>> {
    match result {
        Ok(map) => Ok((ok(), map_to_term(env, map)?).encode(env)),
        Err(err) => error_to_term(env, err),
    }
}

/// Convert a list of maps to an Elixir list, preserving order
pub fn maps_to_list<'a>(env: Env<'a>, maps: &[TagMap]) -> NifResult<Term<'a>> {
    let mut list = Term::list_new_empty(env);
    for map in maps.iter().rev() {
        list = list.list_prepend(map_to_term(env, map)?);
    }
    Ok(list)
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
