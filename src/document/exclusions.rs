use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Words that may never start a rotation.
///
/// Entries are stored lowercased. Lookups compare the whole entry against a
/// single word, so an entry containing a space never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    inner: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        ExclusionSet {
            inner: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.inner.insert(word.into().to_ascii_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.inner.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.inner.into_iter().collect()
    }
}
