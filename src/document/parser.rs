use thiserror::Error;

use super::document::{Document, DocumentError, Title};
use super::exclusions::ExclusionSet;

pub const DEFAULT_DELIMITER: char = ';';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Malformed input: expected at most 2 blocks, found {segments}")]
    MalformedInput { segments: usize },
}

impl From<DocumentError> for ParseError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NoTitles => ParseError::EmptyInput,
        }
    }
}

/// Parse raw text into a Document.
///
/// Layout: `[exclusions <delimiter>] titles`. Empty segments between
/// delimiters are ignored, so a leading or trailing delimiter is harmless.
/// Both blocks are newline separated and lowercased; title lines are further
/// split on spaces, exclusion lines are kept whole.
pub fn parse(raw: &str, delimiter: char) -> Result<Document, ParseError> {
    let segments: Vec<&str> = raw.split(delimiter).filter(|s| !s.is_empty()).collect();

    let (titles_block, exclusions_block) = match segments.as_slice() {
        [] => return Err(ParseError::EmptyInput),
        [titles] => (*titles, None),
        [exclusions, titles] => (*titles, Some(*exclusions)),
        _ => {
            return Err(ParseError::MalformedInput {
                segments: segments.len(),
            })
        }
    };

    let titles: Vec<Title> = non_empty_lines(titles_block)
        .map(|line| Title::from_line(&line))
        .filter(|title| !title.is_empty())
        .collect();

    let exclusions: ExclusionSet = exclusions_block
        .map(|block| {
            non_empty_lines(block)
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect()
        })
        .unwrap_or_default();

    for entry in exclusions.iter().filter(|e| e.contains(' ')) {
        tracing::warn!(
            exclusion = %entry,
            "exclusion spans several words and will never match a pivot"
        );
    }

    let document = Document::new(titles, exclusions)?;

    tracing::debug!(
        titles = document.titles().len(),
        exclusions = document.exclusions().len(),
        "parsed document"
    );

    Ok(document)
}

fn non_empty_lines(block: &str) -> impl Iterator<Item = String> + '_ {
    block
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
}
