//! Parsing Strategy Module
//!
//! - Single document: `tree::parse_map` / `tree::parse_bytes`
//! - Many documents: parallel batch parsing over Rayon

pub mod parallel;

pub use parallel::{parse_many, try_parse_many};
