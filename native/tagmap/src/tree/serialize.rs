//! Tag map serialization
//!
//! Writes a `TagMap` back to the paired-tag form the parser reads. Leaves
//! are written verbatim; nothing is escaped.

use super::value::{TagMap, TagValue};

// Stack entries: Either entering a tag or need to write its closing tag
enum StackEntry<'m> {
    Enter(&'m str, &'m TagValue),
    Close(&'m str),
}

fn push_children<'m>(stack: &mut Vec<StackEntry<'m>>, map: &'m TagMap) {
    for (name, value) in map {
        stack.push(StackEntry::Enter(name, value));
    }
}

/// Serialize a map to tags.
/// Uses iterative approach with explicit stack to avoid stack overflow on deep maps
pub fn to_xml(map: &TagMap) -> String {
    let mut buf = String::with_capacity(256);
    let mut stack: Vec<StackEntry<'_>> = Vec::with_capacity(64);
    push_children(&mut stack, map);

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Close(name) => {
                buf.push_str("</");
                buf.push_str(name);
                buf.push('>');
            }
            StackEntry::Enter(name, value) => {
                buf.push('<');
                buf.push_str(name);
                buf.push('>');
                match value {
                    TagValue::Leaf(text) => {
                        buf.push_str(text);
                        buf.push_str("</");
                        buf.push_str(name);
                        buf.push('>');
                    }
                    TagValue::Map(children) => {
                        // Closing tag is processed after all children
                        stack.push(StackEntry::Close(name));
                        push_children(&mut stack, children);
                    }
                }
            }
        }
    }

    buf
}
