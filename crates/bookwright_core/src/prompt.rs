//! Prompt composition for outline generation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default persona given to the model.
pub const DEFAULT_PERSONA: &str = "You are an author, with cheesy humor, \
that writes about business, tech and consulting, \
focused on code examples language";

/// Default structure request.
pub const DEFAULT_STRUCTURE: &str = "Can you give the chapters, \
subchapters and sections for a book \
about how to be a tech consultant, \
with approximately 500 pages";

/// Default output-format instructions, naming the short outline keys.
pub const DEFAULT_FORMATTING: &str = "---\n\
The answer should be given in json format, using double quotes as delimiters, \
with only the json content and nothing else, with the fields:\n\
book_title as `bt`, subtitle as `ss`, chapters as `cs` (as an array), \
chapter_number as `cn`, chapter_title as `ct`, chapter_description as `cd`, \
chapter_pages as `cp`, subchapters as `ss` (as an array), \
subchapter_number (int) as `scn`, subchapter_title as `sct`, \
subchapter_description as `scd`, subchapter_pages as `scp`, \
sections (as an array) as `scs`, section_number (int) as `sn`, \
section_title as `st`, section_description as `sd`, section_pages as `sp`";

/// The three free-text fields the user edits before generating an outline.
///
/// Missing fields fall back to the defaults when deserialized.
///
/// # Examples
///
/// ```
/// use bookwright_core::OutlinePrompt;
///
/// let prompt = OutlinePrompt::new("who", "what", "how");
/// assert_eq!(prompt.compose(), "who\n\nwhat\n\nhow");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct OutlinePrompt {
    /// Who the author is
    persona: String,
    /// What book to outline
    structure: String,
    /// How the answer must be formatted
    formatting: String,
}

impl OutlinePrompt {
    /// Creates a prompt from its three parts.
    pub fn new(
        persona: impl Into<String>,
        structure: impl Into<String>,
        formatting: impl Into<String>,
    ) -> Self {
        Self {
            persona: persona.into(),
            structure: structure.into(),
            formatting: formatting.into(),
        }
    }

    /// Joins the three parts with blank lines into the message sent to the model.
    pub fn compose(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.persona, self.structure, self.formatting)
    }
}

impl Default for OutlinePrompt {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA, DEFAULT_STRUCTURE, DEFAULT_FORMATTING)
    }
}
