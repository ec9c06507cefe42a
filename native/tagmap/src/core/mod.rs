//! Core scanning primitives
//!
//! - Scanner: SIMD-accelerated delimiter and literal search using memchr
//! - Encoding: BOM / UTF-16 detection and decoding to UTF-8 text

pub mod encoding;
pub mod scanner;
