//! Parse result model
//!
//! A node is either raw text or a map of uniquely named children.

use std::collections::HashMap;

/// Children of one tag, keyed by tag name
pub type TagMap = HashMap<String, TagValue>;

/// Value of a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// Text content, copied verbatim
    Leaf(String),
    /// Nested tags
    Map(TagMap),
}

impl TagValue {
    /// Text of a leaf
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TagValue::Leaf(text) => Some(text),
            TagValue::Map(_) => None,
        }
    }

    /// Children of a map
    pub fn as_map(&self) -> Option<&TagMap> {
        match self {
            TagValue::Map(map) => Some(map),
            TagValue::Leaf(_) => None,
        }
    }

    /// Look up a child by name (None for leaves)
    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.as_map()?.get(key)
    }

    /// Number of map levels below this value; a leaf has depth 0
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((value, level)) = stack.pop() {
            match value {
                TagValue::Leaf(_) => deepest = deepest.max(level),
                TagValue::Map(map) => {
                    deepest = deepest.max(level + 1);
                    stack.extend(map.values().map(|child| (child, level + 1)));
                }
            }
        }
        deepest
    }
}

// Tears nested maps down from a worklist; the derived drop would recurse
// once per level.
impl Drop for TagValue {
    fn drop(&mut self) {
        let TagValue::Map(map) = self else { return };
        if map.is_empty() {
            return;
        }
        let mut pending = vec![std::mem::take(map)];
        while let Some(mut map) = pending.pop() {
            for (_, mut value) in map.drain() {
                if let TagValue::Map(children) = &mut value {
                    pending.push(std::mem::take(children));
                }
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(text: &str) -> Self {
        TagValue::Leaf(text.to_string())
    }
}

impl From<TagMap> for TagValue {
    fn from(map: TagMap) -> Self {
        TagValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut inner = TagMap::new();
        inner.insert("bar".to_string(), TagValue::from("baz"));
        let value = TagValue::from(inner);

        assert_eq!(value.get("bar").and_then(TagValue::as_leaf), Some("baz"));
        assert!(value.as_leaf().is_none());
        assert!(value.get("missing").is_none());
        assert!(TagValue::from("x").get("bar").is_none());
    }

    #[test]
    fn test_depth() {
        let mut inner = TagMap::new();
        inner.insert("c".to_string(), TagValue::from("x"));
        let mut outer = TagMap::new();
        outer.insert("b".to_string(), TagValue::Map(inner));
        outer.insert("d".to_string(), TagValue::from("y"));

        assert_eq!(TagValue::from("x").depth(), 0);
        assert_eq!(TagValue::Map(outer).depth(), 2);
        assert_eq!(TagValue::Map(TagMap::new()).depth(), 1);
    }

    #[test]
    fn test_deep_tree_drops() {
        let mut value = TagValue::from("x");
        for i in 0..100_000 {
            let mut map = TagMap::new();
            map.insert(format!("t{}", i), value);
            value = TagValue::Map(map);
        }
        assert_eq!(value.depth(), 100_000);
        drop(value);
    }
}
