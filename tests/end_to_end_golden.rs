mod common;

use kwic_core::ordering::CaseInsensitiveOrder;
use kwic_core::{IndexConfig, KwicIndexer};

#[test]
fn golden_sample_index() {
    let index = KwicIndexer::default().build(common::SAMPLE).unwrap();
    let lines: Vec<&str> = index.lines().collect();

    const EXPECTED: &[&str] = &[
        "the old man AND the sea",
        "a portrait of the ARTIST as a young man",
        "a portrait of the artist AS a young man",
        "the ASCENT of man",
        "a man is a man but BUBBLESORT is a dog",
        "a man is a man BUT bubblesort is a dog",
        "DESCENT of man",
        "a man is a man but bubblesort is a DOG",
        "a portrait of the artist as a young MAN",
        "the old MAN and the sea",
        "a man is a MAN but bubblesort is a dog",
        "descent of MAN",
        "a MAN is a man but bubblesort is a dog",
        "the ascent of MAN",
        "descent OF man",
        "the ascent OF man",
        "a portrait OF the artist as a young man",
        "the OLD man and the sea",
        "a PORTRAIT of the artist as a young man",
        "the old man and the SEA",
        "a portrait of THE artist as a young man",
        "THE ascent of man",
        "THE old man and the sea",
        "the old man and THE sea",
        "a portrait of the artist as a YOUNG man",
    ];

    assert_eq!(lines, EXPECTED);
}

#[test]
fn golden_old_man_and_ascent_of_man() {
    let index = KwicIndexer::default()
        .build("the old man and the sea\nthe ascent of man")
        .unwrap();

    let keys: Vec<&str> = index.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "and the sea the old man",
            "ascent of man the",
            "man and the sea the old",
            "man the ascent of",
            "of man the ascent",
            "old man and the sea the",
            "sea the old man and the",
            "the ascent of man",
            "the old man and the sea",
            "the sea the old man and",
        ]
    );

    let man_and = &index.entries[2];
    assert_eq!(man_and.line, "the old MAN and the sea");
    assert_eq!((man_and.title_index, man_and.offset), (0, 2));
    assert_eq!(index.entries[3].line, "the ascent of MAN");
}

#[test]
fn golden_exclusion_example() {
    let index = KwicIndexer::default()
        .build("a\nthe\nis\n;\na man is a man but bubblesort is a dog")
        .unwrap();

    let lines: Vec<&str> = index.lines().collect();
    assert_eq!(
        lines,
        vec![
            "a man is a man but BUBBLESORT is a dog",
            "a man is a man BUT bubblesort is a dog",
            "a man is a man but bubblesort is a DOG",
            "a man is a MAN but bubblesort is a dog",
            "a MAN is a man but bubblesort is a dog",
        ]
    );

    assert_eq!(index.summary.rotations_considered, 10);
    assert_eq!(index.summary.rotations_suppressed, 5);
    assert_eq!(index.summary.entries, 5);
}

#[test]
fn custom_delimiter_end_to_end() {
    let indexer = KwicIndexer::new(IndexConfig::with_delimiter('#'), CaseInsensitiveOrder);
    let index = indexer.build("of\n#\ndescent of man").unwrap();

    let lines: Vec<&str> = index.lines().collect();
    assert_eq!(lines, vec!["DESCENT of man", "descent of MAN"]);
    assert_eq!(index.summary.delimiter, '#');
}

#[test]
fn parse_errors_surface_from_the_indexer() {
    use kwic_core::document::ParseError;
    use kwic_core::types::IndexError;

    let indexer = KwicIndexer::default();
    assert_eq!(
        indexer.build("").unwrap_err(),
        IndexError::Parse(ParseError::EmptyInput)
    );
    assert_eq!(
        indexer.build("a;b;c").unwrap_err(),
        IndexError::Parse(ParseError::MalformedInput { segments: 3 })
    );
}
