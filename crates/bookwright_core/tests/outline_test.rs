//! Outline model deserialization and counts.

use bookwright_core::{Book, Chapter, MAX_COUNT, Section, Subchapter, fixture_book, parse_book};

#[test]
fn test_short_keys_deserialize() {
    let book: Book = serde_json::from_str(
        r#"{"bt": "T", "ss": "S", "cs": [{"cn": 1, "ct": "C", "cd": "D", "cp": 3,
            "ss": [{"scn": 1, "sct": "SC", "scs": [{"sn": 1, "st": "X", "sp": "2"}]}]}]}"#,
    )
    .unwrap();

    assert_eq!(book.title(), "T");
    assert_eq!(book.subtitle(), "S");
    let chapter = &book.chapters()[0];
    assert_eq!(*chapter.pages(), Some(3));
    let section = &chapter.subchapters()[0].sections()[0];
    assert_eq!(section.title(), "X");
    assert_eq!(*section.pages(), Some(2));
}

#[test]
fn test_long_keys_are_aliases() {
    let book: Book = serde_json::from_str(
        r#"{"title": "T", "subtitle": "S", "chapters": [{"title": "C", "subchapters": []}]}"#,
    )
    .unwrap();

    assert_eq!(book.title(), "T");
    assert_eq!(book.chapters()[0].title(), "C");
}

#[test]
fn test_serializes_with_short_keys_and_round_trips() {
    let book = Book::builder()
        .title("T")
        .subtitle("S")
        .chapters(vec![Chapter::builder().title("C").pages(4u32).build().unwrap()])
        .build()
        .unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["bt"], "T");
    assert_eq!(json["cs"][0]["cp"], 4);
    assert!(json.get("id").is_none());

    let back: Book = serde_json::from_value(json).unwrap();
    assert_eq!(back, book);
}

#[test]
fn test_counts() {
    let section = Section::builder().title("s").build().unwrap();
    let sub = Subchapter::builder()
        .sections(vec![section.clone(), section])
        .build()
        .unwrap();
    let chapter = Chapter::builder()
        .subchapters(vec![sub.clone(), sub])
        .build()
        .unwrap();
    let book = Book::builder().chapters(vec![chapter]).build().unwrap();

    assert_eq!(book.subchapter_count(), 2);
    assert_eq!(book.section_count(), 4);
}

#[test]
fn test_fixture_parses() {
    let book = fixture_book().unwrap();
    assert_eq!(
        book.title(),
        "The Tech Consultant's Guide: From Code to Consulting"
    );
    assert_eq!(book.chapters().len(), 3);
    assert_eq!(book.subchapter_count(), 7);
    assert_eq!(book.section_count(), 19);
}

fn chapter_pages(raw: &str) -> Option<u32> {
    let book = parse_book(&format!(r#"{{"bt": "T", "cs": [{{"ct": "C", "cp": {raw}}}]}}"#))
        .unwrap();
    *book.chapters()[0].pages()
}

#[test]
fn test_pages_accept_numeric_forms() {
    assert_eq!(chapter_pages("12"), Some(12));
    assert_eq!(chapter_pages("12.4"), Some(12));
    assert_eq!(chapter_pages(r#"" 7 ""#), Some(7));
    assert_eq!(chapter_pages(r#""7.6""#), Some(8));
}

#[test]
fn test_pages_drop_garbage() {
    assert_eq!(chapter_pages(r#""about ten""#), None);
    assert_eq!(chapter_pages("-3"), None);
    assert_eq!(chapter_pages("null"), None);
    assert_eq!(chapter_pages("[1]"), None);
}

#[test]
fn test_pages_beyond_storable_range_are_absent() {
    assert_eq!(chapter_pages("3000000000"), None);
    assert_eq!(chapter_pages(r#""3000000000""#), None);
    assert_eq!(chapter_pages("3e9"), None);
    assert_eq!(chapter_pages(&MAX_COUNT.to_string()), Some(MAX_COUNT));
}

#[test]
fn test_text_fields_stringify_scalars() {
    let book = parse_book(r#"{"bt": 42, "ss": null, "cs": [{"ct": {"x": 1}}]}"#).unwrap();
    assert_eq!(book.title(), "42");
    assert_eq!(book.subtitle(), "");
    assert_eq!(book.chapters()[0].title(), "");
}

#[test]
fn test_null_lists_are_empty() {
    let book = parse_book(r#"{"bt": "T", "cs": [{"ct": "C", "ss": null}]}"#).unwrap();
    assert!(book.chapters()[0].subchapters().is_empty());
    assert!(parse_book(r#"{"bt": "T", "cs": "none"}"#).is_err());
}
