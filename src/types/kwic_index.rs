use serde::{Deserialize, Serialize};

use crate::document::ParseError;
use crate::render::RenderError;
use crate::types::identifiers::SourceVersion;

/// One line of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Title in original order with the pivot upper-cased.
    pub line: String,
    /// Rotated words joined by single spaces; what the entry was sorted by.
    pub key: String,
    pub title_index: usize,
    pub offset: usize,
}

/// Counts describing how an index was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub source_version: SourceVersion,
    pub delimiter: char,

    pub titles: usize,
    pub exclusions: usize,

    pub rotations_considered: usize,
    pub rotations_suppressed: usize,
    pub entries: usize,
}

/// The final, sorted KWIC index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwicIndex {
    pub entries: Vec<IndexEntry>,
    pub summary: IndexSummary,
}

impl KwicIndex {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.line.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
