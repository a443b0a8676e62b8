//! Extracting and parsing outlines from model replies.

use bookwright_core::{
    DEFAULT_FORMATTING, DEFAULT_STRUCTURE, OutlinePrompt, extract_json_object, parse_book,
};
use bookwright_error::OutlineErrorKind;

#[test]
fn test_extract_prefers_fenced_block() {
    let reply = "{ignored} ```json\n{\"bt\": \"A\"}\n``` trailing }";
    assert_eq!(extract_json_object(reply), Some("{\"bt\": \"A\"}"));
}

#[test]
fn test_extract_from_prose() {
    let reply = "Here you go: {\"bt\": \"A\"} hope it helps";
    assert_eq!(extract_json_object(reply), Some("{\"bt\": \"A\"}"));
}

#[test]
fn test_extract_rejects_reversed_braces() {
    assert_eq!(extract_json_object("} then {"), None);
}

#[test]
fn test_parse_missing_json() {
    let err = parse_book("I cannot help with that.").unwrap_err();
    assert_eq!(err.kind, OutlineErrorKind::MissingJson);
}

#[test]
fn test_parse_syntax_error_is_malformed() {
    let err = parse_book("{\"bt\": \"T\", \"cs\": [}").unwrap_err();
    assert!(matches!(err.kind, OutlineErrorKind::MalformedPayload(_)));
}

#[test]
fn test_parse_wrong_list_shape_is_malformed() {
    let err = parse_book(r#"{"bt": "T", "cs": {"cn": 1}}"#).unwrap_err();
    assert!(matches!(err.kind, OutlineErrorKind::MalformedPayload(_)));
}

#[test]
fn test_parse_tolerates_missing_fields() {
    let book = parse_book(r#"{"bt": "T", "cs": [{"ct": "Only a title"}]}"#).unwrap();
    assert_eq!(book.subtitle(), "");
    assert_eq!(*book.chapters()[0].pages(), None);
    assert!(book.chapters()[0].subchapters().is_empty());
}

#[test]
fn test_missing_fields_use_defaults() {
    let prompt: OutlinePrompt = serde_json::from_str(r#"{"persona": "A pirate"}"#).unwrap();
    assert_eq!(prompt.persona(), "A pirate");
    assert_eq!(prompt.structure(), DEFAULT_STRUCTURE);
    assert_eq!(prompt.formatting(), DEFAULT_FORMATTING);
}

#[test]
fn test_default_formatting_names_every_key() {
    for key in ["bt", "cs", "cn", "ct", "cd", "cp", "scn", "sct", "scd", "scp", "scs", "sn", "st", "sd", "sp"] {
        assert!(DEFAULT_FORMATTING.contains(&format!("`{key}`")), "missing {key}");
    }
}
