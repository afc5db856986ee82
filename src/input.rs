use std::fs;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Can't read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the raw index text comes from.
///
/// Resolved to a plain string before parsing; the indexer never reads files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    InlineText(String),
    NamedFile(PathBuf),
}

impl InputSource {
    pub fn resolve(&self) -> Result<String, InputError> {
        match self {
            InputSource::InlineText(content) => Ok(content.clone()),
            InputSource::NamedFile(path) => {
                tracing::debug!(path = %path.display(), "reading input file");
                fs::read_to_string(path).map_err(|source| InputError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
