//! Bundled outline used when generation runs against fixture data.

use crate::{Book, parse_book};
use bookwright_error::OutlineError;

/// Raw JSON of the bundled outline, in the short-key wire format.
pub const FIXTURE_OUTLINE: &str = include_str!("../fixtures/tech_consultant.json");

/// Parses the bundled outline.
pub fn fixture_book() -> Result<Book, OutlineError> {
    parse_book(FIXTURE_OUTLINE)
}
