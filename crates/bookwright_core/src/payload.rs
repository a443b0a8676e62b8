//! Parsing model replies into a [`Book`].

use crate::Book;
use bookwright_error::{OutlineError, OutlineErrorKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z]*\s*(\{.*\})\s*```").expect("fenced JSON pattern is valid")
});

/// Locates the JSON object inside a model reply.
///
/// Accepts a bare object, an object inside a fenced code block, or an object
/// surrounded by prose (first `{` through last `}`).
///
/// # Examples
///
/// ```
/// use bookwright_core::extract_json_object;
///
/// let reply = "Sure! Here it is:\n```json\n{\"bt\": \"T\"}\n```";
/// assert_eq!(extract_json_object(reply), Some("{\"bt\": \"T\"}"));
/// assert_eq!(extract_json_object("no json here"), None);
/// ```
pub fn extract_json_object(text: &str) -> Option<&str> {
    if let Some(captures) = FENCED_JSON.captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parses a model reply into a [`Book`].
///
/// # Errors
///
/// Returns [`OutlineErrorKind::MissingJson`] when the reply contains no JSON
/// object and [`OutlineErrorKind::MalformedPayload`] when the object does not
/// have the shape of an outline.
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse_book(text: &str) -> Result<Book, OutlineError> {
    let json = extract_json_object(text).ok_or_else(|| {
        warn!("Reply contains no JSON object");
        OutlineError::new(OutlineErrorKind::MissingJson)
    })?;

    let book: Book = serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "Reply is not a valid outline");
        OutlineError::new(OutlineErrorKind::MalformedPayload(e.to_string()))
    })?;

    debug!(
        title = %book.title(),
        chapters = book.chapters().len(),
        subchapters = book.subchapter_count(),
        sections = book.section_count(),
        "Parsed outline"
    );
    Ok(book)
}
