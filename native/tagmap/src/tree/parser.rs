//! Recursive descent tag parser
//!
//! Strips one leading tag at a time: the tag's inner content is parsed one
//! level down, the text after its closing tag is walked as the next sibling.
//! A span that does not open with `<` is a leaf and ends the descent.
//!
//! Closing tags are matched by first occurrence, not by balance: a
//! descendant with the same name as its ancestor closes the ancestor early.
//!
//! Descent keeps its levels on an explicit stack of frames, so nesting depth
//! costs heap, not native stack.

use crate::core::scanner::{Scanner, TagLiterals};
use crate::error::{ErrorKind, Result, StructuralError};

use super::span::Span;
use super::value::{TagMap, TagValue};

/// Tag in the enclosing run whose content a frame is parsing
#[derive(Debug, Clone, Copy)]
struct Owner {
    name: Span,
    /// Text after the owner's closing tag
    rest: Span,
}

/// One run of sibling tags being collected into a map
struct Frame {
    /// Start of the next tag in the run
    cursor: Span,
    map: TagMap,
    /// None for the document level
    owner: Option<Owner>,
}

impl Frame {
    fn new(cursor: Span, owner: Option<Owner>) -> Self {
        Frame {
            cursor,
            map: TagMap::new(),
            owner,
        }
    }
}

/// Parser over one decoded document
pub struct TagParser<'a> {
    input: &'a str,
}

impl<'a> TagParser<'a> {
    pub fn new(input: &'a str) -> Self {
        TagParser { input }
    }

    /// Parse the whole document as a sequence of top-level tags
    pub fn parse_document(&self) -> Result<TagMap> {
        let span = Span::whole(self.input);
        if !self.opens_tag(span) {
            return Err(StructuralError::new(ErrorKind::TooShortOrUnopened, 0));
        }
        self.parse_siblings(span)
    }

    /// Parse a span into a leaf or a map
    pub fn parse_node(&self, span: Span) -> Result<TagValue> {
        if !self.opens_tag(span) {
            return Ok(TagValue::Leaf(span.as_str(self.input).to_string()));
        }
        self.parse_siblings(span).map(TagValue::Map)
    }

    /// Parse a run of sibling tags starting at the beginning of `span`.
    ///
    /// Every map produced has at least one entry. Later siblings overwrite
    /// earlier ones with the same name. A tag's content is parsed before
    /// the siblings that follow it.
    fn parse_siblings(&self, span: Span) -> Result<TagMap> {
        let mut stack: Vec<Frame> = Vec::new();
        let mut current = Frame::new(span, None);

        loop {
            let name = self.key_name(current.cursor)?;
            let (content, rest) = self.value_spans(name, current.cursor)?;

            if self.opens_tag(content) {
                let child = Frame::new(content, Some(Owner { name, rest }));
                stack.push(std::mem::replace(&mut current, child));
                continue;
            }

            let mut name = name;
            let mut rest = rest;
            let mut value = TagValue::Leaf(content.as_str(self.input).to_string());

            // Insert, then close every run that just ended
            loop {
                current.map.insert(name.as_str(self.input).to_string(), value);

                if let Some(next) = self.next_sibling(rest)? {
                    current.cursor = next;
                    break;
                }

                match (current.owner, stack.pop()) {
                    (Some(owner), Some(parent)) => {
                        let finished = std::mem::replace(&mut current, parent);
                        value = TagValue::Map(finished.map);
                        name = owner.name;
                        rest = owner.rest;
                    }
                    _ => return Ok(current.map),
                }
            }
        }
    }

    /// Where the run continues after a closed tag, None when it ends
    fn next_sibling(&self, rest: Span) -> Result<Option<Span>> {
        if rest.is_empty() {
            return Ok(None);
        }
        // Anything after a closed tag must be another tag
        if !self.opens_tag(rest) {
            return Err(StructuralError::new(ErrorKind::InvalidNesting, rest.offset));
        }
        Ok(Some(rest))
    }

    /// Name between the leading `<` of `span` and the first `>`
    pub fn key_name(&self, span: Span) -> Result<Span> {
        let scanner = Scanner::new(span.slice(self.input));
        match scanner.find_tag_end() {
            Some(end) => Ok(span.sub(1, end)),
            None => Err(StructuralError::new(ErrorKind::MissingTagName, span.offset)),
        }
    }

    /// Split `span` into the content of tag `name` and the text after its
    /// closing tag
    pub fn value_spans(&self, name: Span, span: Span) -> Result<(Span, Span)> {
        let literals = TagLiterals::new(name.slice(self.input));
        let scanner = Scanner::new(span.slice(self.input));
        let unmatched = || StructuralError::new(ErrorKind::UnmatchedClosingTag, span.offset);

        let open = scanner.find(literals.open(), 0).ok_or_else(unmatched)?;
        let content_start = open + literals.open_len();
        let content_end = scanner
            .find(literals.close(), content_start)
            .ok_or_else(unmatched)?;
        let rest_start = content_end + literals.close_len();

        Ok((span.sub(content_start, content_end), span.tail(rest_start)))
    }

    #[inline]
    fn opens_tag(&self, span: Span) -> bool {
        Scanner::new(span.slice(self.input)).starts_with_tag()
    }
}
