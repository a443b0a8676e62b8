//! Book outline data model.
//!
//! The serde names are the short keys the model is asked to answer with;
//! long names are accepted as aliases.

use crate::lenient;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A generated book: the root of the outline hierarchy.
///
/// # Examples
///
/// ```
/// use bookwright_core::{Book, Chapter};
///
/// let book = Book::builder()
///     .title("T")
///     .subtitle("S")
///     .chapters(vec![Chapter::builder().title("Intro").build().unwrap()])
///     .build()
///     .unwrap();
///
/// assert_eq!(book.title(), "T");
/// assert_eq!(book.chapters().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder,
)]
#[builder(setter(into), default)]
pub struct Book {
    /// Storage identifier, present once the book has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    id: Option<i32>,
    /// Book title
    #[serde(
        rename = "bt",
        alias = "title",
        alias = "book_title",
        default,
        deserialize_with = "lenient::text"
    )]
    title: String,
    /// Book subtitle
    #[serde(
        rename = "ss",
        alias = "subtitle",
        alias = "st",
        default,
        deserialize_with = "lenient::text"
    )]
    subtitle: String,
    /// Free-form description
    #[serde(
        rename = "bd",
        alias = "description",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "String::is_empty"
    )]
    description: String,
    /// Chapters in reading order
    #[serde(
        rename = "cs",
        alias = "chapters",
        default,
        deserialize_with = "lenient::list"
    )]
    chapters: Vec<Chapter>,
}

impl Book {
    /// Returns a builder for constructing a Book.
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }

    /// Returns the same book tagged with a storage identifier.
    pub fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Total number of subchapters across all chapters.
    pub fn subchapter_count(&self) -> usize {
        self.chapters.iter().map(|c| c.subchapters.len()).sum()
    }

    /// Total number of sections across all subchapters.
    pub fn section_count(&self) -> usize {
        self.chapters
            .iter()
            .flat_map(|c| c.subchapters.iter())
            .map(|s| s.sections.len())
            .sum()
    }
}

/// A chapter of a book.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder,
)]
#[builder(setter(into), default)]
pub struct Chapter {
    /// Sequence number as reported by the model
    #[serde(
        rename = "cn",
        alias = "number",
        alias = "chapter_number",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    number: Option<u32>,
    #[serde(
        rename = "ct",
        alias = "title",
        alias = "chapter_title",
        default,
        deserialize_with = "lenient::text"
    )]
    title: String,
    #[serde(
        rename = "cd",
        alias = "description",
        alias = "chapter_description",
        default,
        deserialize_with = "lenient::text"
    )]
    description: String,
    /// Estimated page count
    #[serde(
        rename = "cp",
        alias = "pages",
        alias = "chapter_pages",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    pages: Option<u32>,
    #[serde(
        rename = "ss",
        alias = "subchapters",
        default,
        deserialize_with = "lenient::list"
    )]
    subchapters: Vec<Subchapter>,
}

impl Chapter {
    /// Returns a builder for constructing a Chapter.
    pub fn builder() -> ChapterBuilder {
        ChapterBuilder::default()
    }
}

/// A subchapter, numbered within its chapter.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder,
)]
#[builder(setter(into), default)]
pub struct Subchapter {
    #[serde(
        rename = "scn",
        alias = "number",
        alias = "subchapter_number",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    number: Option<u32>,
    #[serde(
        rename = "sct",
        alias = "title",
        alias = "subchapter_title",
        default,
        deserialize_with = "lenient::text"
    )]
    title: String,
    #[serde(
        rename = "scd",
        alias = "description",
        alias = "subchapter_description",
        default,
        deserialize_with = "lenient::text"
    )]
    description: String,
    #[serde(
        rename = "scp",
        alias = "pages",
        alias = "subchapter_pages",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    pages: Option<u32>,
    #[serde(
        rename = "scs",
        alias = "sections",
        default,
        deserialize_with = "lenient::list"
    )]
    sections: Vec<Section>,
}

impl Subchapter {
    /// Returns a builder for constructing a Subchapter.
    pub fn builder() -> SubchapterBuilder {
        SubchapterBuilder::default()
    }
}

/// A section: the leaf of the outline.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder,
)]
#[builder(setter(into), default)]
pub struct Section {
    #[serde(
        rename = "sn",
        alias = "number",
        alias = "section_number",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    number: Option<u32>,
    #[serde(
        rename = "st",
        alias = "title",
        alias = "section_title",
        default,
        deserialize_with = "lenient::text"
    )]
    title: String,
    #[serde(
        rename = "sd",
        alias = "description",
        alias = "section_description",
        default,
        deserialize_with = "lenient::text"
    )]
    description: String,
    #[serde(
        rename = "sp",
        alias = "pages",
        alias = "section_pages",
        default,
        deserialize_with = "lenient::count"
    )]
    #[builder(setter(into, strip_option))]
    pages: Option<u32>,
    /// Body text, once written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    content: Option<String>,
}

impl Section {
    /// Returns a builder for constructing a Section.
    pub fn builder() -> SectionBuilder {
        SectionBuilder::default()
    }
}
