use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::exclusions::ExclusionSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document must contain at least one title")]
    NoTitles,
}

/// A single title, stored as lowercased words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Title {
    words: Vec<String>,
}

impl Title {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Title {
            words: words
                .into_iter()
                .map(|w| w.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Split a line on single spaces. Runs of spaces do not produce empty words.
    pub fn from_line(line: &str) -> Self {
        Title::new(line.split(' ').filter(|w| !w.is_empty()))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Title {
    fn from(words: Vec<String>) -> Self {
        Title::new(words)
    }
}

impl From<Title> for Vec<String> {
    fn from(title: Title) -> Self {
        title.words
    }
}

/// Titles plus the words excluded from starting a rotation.
///
/// Deserializing goes through [`Document::new`], so the title invariant
/// holds for documents read back from JSON too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentParts")]
pub struct Document {
    titles: Vec<Title>,
    exclusions: ExclusionSet,
}

#[derive(Deserialize)]
struct DocumentParts {
    titles: Vec<Title>,
    #[serde(default)]
    exclusions: ExclusionSet,
}

impl TryFrom<DocumentParts> for Document {
    type Error = DocumentError;

    fn try_from(parts: DocumentParts) -> Result<Self, Self::Error> {
        Document::new(parts.titles, parts.exclusions)
    }
}

impl Document {
    /// Assemble a Document from already-parsed parts.
    ///
    /// Fails when `titles` is empty. Individual titles may still be empty;
    /// they simply contribute no rotations.
    pub fn new(titles: Vec<Title>, exclusions: ExclusionSet) -> Result<Self, DocumentError> {
        if titles.is_empty() {
            return Err(DocumentError::NoTitles);
        }

        Ok(Document { titles, exclusions })
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn title(&self, index: usize) -> Option<&Title> {
        self.titles.get(index)
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Number of rotations before exclusion filtering.
    pub fn word_count(&self) -> usize {
        self.titles.iter().map(Title::len).sum()
    }
}
