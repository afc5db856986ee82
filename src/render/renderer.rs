use thiserror::Error;

use crate::document::Document;
use crate::rotation::Rotation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Rotation refers to title {title_index} at offset {offset}, but the document has no such word")]
    InternalConsistency { title_index: usize, offset: usize },
}

/// Render one rotation as its title in original word order, with the pivot
/// word upper-cased.
pub fn render_line(rotation: &Rotation<'_>, doc: &Document) -> Result<String, RenderError> {
    let inconsistent = || RenderError::InternalConsistency {
        title_index: rotation.title_index,
        offset: rotation.offset,
    };

    let title = doc.title(rotation.title_index).ok_or_else(inconsistent)?;
    if rotation.offset >= title.len() {
        return Err(inconsistent());
    }

    let line = title
        .words()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == rotation.offset {
                word.to_ascii_uppercase()
            } else {
                word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(line)
}

/// Render rotations in the order given.
pub fn render(sorted: &[Rotation<'_>], doc: &Document) -> Result<Vec<String>, RenderError> {
    let lines = sorted
        .iter()
        .map(|rotation| render_line(rotation, doc))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(lines = lines.len(), "rendered index");

    Ok(lines)
}
