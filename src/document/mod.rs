pub mod exclusions;
pub mod document;
pub mod parser;

pub use exclusions::ExclusionSet;
pub use document::{Document, DocumentError, Title};
pub use parser::{parse, ParseError, DEFAULT_DELIMITER};
