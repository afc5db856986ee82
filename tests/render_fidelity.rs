mod common;

use kwic_core::ordering::sort;
use kwic_core::render::{render, render_line, RenderError};
use kwic_core::rotation::{rotate, Rotation};

#[test]
fn pivot_is_upper_cased_in_original_order() {
    let doc = common::doc("the old man and the sea");
    let rotation = Rotation {
        words: vec!["man", "and", "the", "sea", "the", "old"],
        offset: 2,
        title_index: 0,
    };

    assert_eq!(render_line(&rotation, &doc).unwrap(), "the old MAN and the sea");
}

#[test]
fn invariant_rendering_preserves_title_words() {
    let doc = common::doc(common::SAMPLE);
    let sorted = sort(rotate(&doc));
    let lines = render(&sorted, &doc).unwrap();

    assert_eq!(lines.len(), sorted.len());

    for (line, rotation) in lines.iter().zip(&sorted) {
        let words: Vec<String> = line
            .to_ascii_lowercase()
            .split(' ')
            .map(str::to_string)
            .collect();
        assert_eq!(words, doc.titles()[rotation.title_index].words());

        // Exactly the pivot is upper-cased
        let pivot = line.split(' ').nth(rotation.offset).unwrap();
        assert_eq!(pivot, rotation.pivot().unwrap().to_ascii_uppercase());
    }
}

#[test]
fn render_keeps_input_order() {
    let doc = common::doc("old man");
    let rotations = rotate(&doc);
    let reversed: Vec<_> = rotations.into_iter().rev().collect();

    let lines = render(&reversed, &doc).unwrap();
    assert_eq!(lines, vec!["old MAN", "OLD man"]);
}

#[test]
fn invariant_out_of_bounds_offset_is_an_internal_error() {
    let doc = common::doc("old man");
    let rotation = Rotation {
        words: vec!["man", "old"],
        offset: 2,
        title_index: 0,
    };

    assert_eq!(
        render(&[rotation], &doc),
        Err(RenderError::InternalConsistency {
            title_index: 0,
            offset: 2
        })
    );
}

#[test]
fn invariant_unknown_title_is_an_internal_error() {
    let doc = common::doc("old man");
    let rotation = Rotation {
        words: vec!["old"],
        offset: 0,
        title_index: 7,
    };

    assert!(matches!(
        render_line(&rotation, &doc),
        Err(RenderError::InternalConsistency { title_index: 7, .. })
    ));
}
