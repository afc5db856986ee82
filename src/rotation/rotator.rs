use crate::document::Document;

use super::Rotation;

/// Cyclic left shift of `items` by `amount` positions.
///
/// `amount` may range over `[-n, n]`; a negative amount counts from the end,
/// so `-1` moves the last item to the front. Anything outside that range
/// returns `None`.
pub fn cyclic_shift<T: Clone>(items: &[T], amount: isize) -> Option<Vec<T>> {
    let n = items.len() as isize;
    if amount < -n || amount > n {
        return None;
    }

    let start = (if amount < 0 { amount + n } else { amount }) as usize;
    let mut shifted = Vec::with_capacity(items.len());
    shifted.extend_from_slice(&items[start..]);
    shifted.extend_from_slice(&items[..start]);
    Some(shifted)
}

/// Every rotation of every title whose first word is not excluded.
///
/// Output follows title order, then increasing offset.
pub fn rotate(doc: &Document) -> Vec<Rotation<'_>> {
    let exclusions = doc.exclusions();
    let mut rotations = Vec::with_capacity(doc.word_count());

    for (title_index, title) in doc.titles().iter().enumerate() {
        let words: Vec<&str> = title.words().iter().map(String::as_str).collect();

        for offset in 0..words.len() {
            // Excluded pivots are dropped before any allocation.
            if exclusions.contains(words[offset]) {
                continue;
            }

            let Some(rotated) = cyclic_shift(&words, offset as isize) else {
                continue;
            };

            rotations.push(Rotation {
                words: rotated,
                offset,
                title_index,
            });
        }
    }

    tracing::debug!(
        considered = doc.word_count(),
        emitted = rotations.len(),
        "generated rotations"
    );

    rotations
}
