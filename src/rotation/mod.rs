pub mod rotator;

pub use rotator::{cyclic_shift, rotate};

/// One cyclic rotation of a title.
///
/// Borrows its words from the Document it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation<'a> {
    /// Title words shifted left by `offset`.
    pub words: Vec<&'a str>,
    pub offset: usize,
    pub title_index: usize,
}

impl<'a> Rotation<'a> {
    /// The word this rotation starts with.
    pub fn pivot(&self) -> Option<&'a str> {
        self.words.first().copied()
    }

    /// The rotated words joined by single spaces.
    pub fn key(&self) -> String {
        self.words.join(" ")
    }
}
