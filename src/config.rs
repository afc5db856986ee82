use crate::document::DEFAULT_DELIMITER;

// Serializable, comparable, explicit defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexConfig {
    /// Separates the exclusion block from the titles block.
    pub delimiter: char,
}

impl IndexConfig {
    pub fn v0() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::v0()
    }
}
