//! Span - offset and length into the document
//!
//! Zero-copy reference to a region of the input text. The parser only ever
//! narrows spans; text is copied out when a leaf or key is built.

/// A span referencing a portion of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset into the document
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Span covering the whole document
    #[inline]
    pub const fn whole(input: &str) -> Self {
        Self::new(0, input.len())
    }

    /// Check if this span is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset (exclusive)
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Sub-span between two offsets relative to this span's start
    #[inline]
    pub fn sub(&self, start: usize, end: usize) -> Span {
        debug_assert!(start <= end && end <= self.len);
        Span::new(self.offset + start, end - start)
    }

    /// Everything after `start` (relative) to the end of this span
    #[inline]
    pub fn tail(&self, start: usize) -> Span {
        self.sub(start, self.len)
    }

    /// Extract the text from the document.
    ///
    /// Spans are only ever cut at ASCII delimiters, so the bounds always
    /// fall on char boundaries.
    #[inline]
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.offset..self.end()]
    }

    /// Extract the raw bytes from the document
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a [u8] {
        &input.as_bytes()[self.offset..self.end()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_span_as_str() {
        let input = "hello world";
        assert_eq!(Span::new(6, 5).as_str(input), "world");
        assert_eq!(Span::whole(input).as_str(input), input);
    }

    #[test]
    fn test_sub_and_tail_are_absolute() {
        let input = "<a>xyz</a>";
        let outer = Span::new(3, 7);
        assert_eq!(outer.sub(0, 3).as_str(input), "xyz");
        assert_eq!(outer.tail(3).as_str(input), "</a>");
        assert_eq!(outer.tail(7), Span::new(10, 0));
    }
}
