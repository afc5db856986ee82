pub mod comparison;

use crate::rotation::Rotation;

pub use comparison::{compare_ignore_case, CaseInsensitiveOrder, RotationOrder};

/// Sort rotations with the default case-insensitive order.
pub fn sort(rotations: Vec<Rotation<'_>>) -> Vec<Rotation<'_>> {
    sort_with(rotations, &CaseInsensitiveOrder)
}

/// Sort rotations by `order`.
///
/// The sort is stable, so rotations with equal keys keep their generation
/// order (title index, then offset).
pub fn sort_with<'a, O>(mut rotations: Vec<Rotation<'a>>, order: &O) -> Vec<Rotation<'a>>
where
    O: RotationOrder + ?Sized,
{
    rotations.sort_by(|a, b| order.compare(&a.words, &b.words));

    debug_assert!(rotations
        .windows(2)
        .all(|w| order.compare(&w[0].words, &w[1].words).is_le()));

    tracing::debug!(rotations = rotations.len(), "sorted rotations");

    rotations
}
