//! Deterministic Key-Word-In-Context index builder.
//!
//! `kwic-core` parses titles and stop words from delimited text, generates
//! every cyclic rotation of each title that does not start with a stop word,
//! sorts the rotations case-insensitively and renders each one in its
//! title's original word order with the pivot word upper-cased. Identical
//! inputs always produce identical indexes.

pub mod config;
pub mod document;
pub mod index;
pub mod input;
pub mod ordering;
pub mod render;
pub mod rotation;
pub mod types;

pub use config::IndexConfig;
pub use index::KwicIndexer;
pub use input::{InputError, InputSource};
