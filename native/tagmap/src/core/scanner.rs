//! SIMD-accelerated tag scanning using memchr
//!
//! Uses memchr crate for fast byte and substring searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)

use memchr::memchr;
use memchr::memmem::Finder;

/// Scanner over the bytes of a single span
pub struct Scanner<'a> {
    input: &'a [u8],
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input }
    }

    /// Check if the input opens a tag
    #[inline]
    pub fn starts_with_tag(&self) -> bool {
        self.input.first() == Some(&b'<')
    }

    /// Find first '>' (tag end) using SIMD
    #[inline]
    pub fn find_tag_end(&self) -> Option<usize> {
        memchr(b'>', self.input)
    }

    /// Find the first match of `finder` at or after `from`
    #[inline]
    pub fn find(&self, finder: &Finder<'_>, from: usize) -> Option<usize> {
        let haystack = self.input.get(from..)?;
        finder.find(haystack).map(|i| from + i)
    }
}

/// Searchers for one tag name's literals: `<name>` and `</name>`
pub struct TagLiterals {
    open: Finder<'static>,
    close: Finder<'static>,
}

impl TagLiterals {
    pub fn new(name: &[u8]) -> Self {
        let mut open = Vec::with_capacity(name.len() + 2);
        open.push(b'<');
        open.extend_from_slice(name);
        open.push(b'>');

        let mut close = Vec::with_capacity(name.len() + 3);
        close.extend_from_slice(b"</");
        close.extend_from_slice(name);
        close.push(b'>');

        TagLiterals {
            open: Finder::new(&open).into_owned(),
            close: Finder::new(&close).into_owned(),
        }
    }

    #[inline]
    pub fn open(&self) -> &Finder<'static> {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &Finder<'static> {
        &self.close
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.needle().len()
    }

    #[inline]
    pub fn close_len(&self) -> usize {
        self.close.needle().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_end() {
        let scanner = Scanner::new(b"<world>x</world>");
        assert!(scanner.starts_with_tag());
        assert_eq!(scanner.find_tag_end(), Some(6));
        assert_eq!(Scanner::new(b"<world").find_tag_end(), None);
    }

    #[test]
    fn test_find_from_offset() {
        let scanner = Scanner::new(b"<a>1</a><a>2</a>");
        let a = TagLiterals::new(b"a");
        assert_eq!(scanner.find(a.close(), 0), Some(4));
        assert_eq!(scanner.find(a.close(), 5), Some(12));
        assert_eq!(scanner.find(a.close(), 99), None);
        assert_eq!(scanner.find(TagLiterals::new(b"b").close(), 0), None);
    }

    #[test]
    fn test_tag_literals() {
        let lits = TagLiterals::new(b"email");
        assert_eq!(lits.open().needle(), b"<email>");
        assert_eq!(lits.close().needle(), b"</email>");
        assert_eq!(lits.open_len(), 7);
        assert_eq!(lits.close_len(), 8);
    }

    #[test]
    fn test_empty_name_literals() {
        let lits = TagLiterals::new(b"");
        let scanner = Scanner::new(b"<>v</>");
        assert_eq!(scanner.find(lits.open(), 0), Some(0));
        assert_eq!(scanner.find(lits.close(), 2), Some(3));
    }
}
