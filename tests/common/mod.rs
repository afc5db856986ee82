#![allow(dead_code)]

use kwic_core::document::{parse, Document, DEFAULT_DELIMITER};

/// The classic demonstration input: two stop words, five titles.
pub const SAMPLE: &str = "a
is
;
Descent of Man
The Ascent of Man
The Old Man and The Sea
A Portrait of The Artist As a Young Man
A Man is a Man but Bubblesort IS A DOG
";

pub fn doc(raw: &str) -> Document {
    parse(raw, DEFAULT_DELIMITER).expect("fixture must parse")
}
