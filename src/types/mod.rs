pub mod identifiers;
pub mod kwic_index;

pub use identifiers::SourceVersion;
pub use kwic_index::{IndexEntry, IndexError, IndexSummary, KwicIndex};
