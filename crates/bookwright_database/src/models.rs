//! Row types for the outline tables.

use crate::schema::{books, chapters, sections, subchapters};
use chrono::NaiveDateTime;
use derive_getters::Getters;
use diesel::prelude::*;

/// A stored book.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Getters)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookRow {
    id: i32,
    title: String,
    subtitle: String,
    description: String,
    created_at: NaiveDateTime,
}

/// Insertable form of [`BookRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = books)]
pub struct NewBookRow<'a> {
    /// Book title
    pub title: &'a str,
    /// Book subtitle
    pub subtitle: &'a str,
    /// Free-form description
    pub description: &'a str,
}

/// A stored chapter.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Getters)]
#[diesel(table_name = chapters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChapterRow {
    id: i32,
    book_id: i32,
    position: i32,
    number: Option<i32>,
    title: String,
    description: String,
    pages: Option<i32>,
}

/// Insertable form of [`ChapterRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = chapters)]
pub struct NewChapterRow<'a> {
    /// Owning book
    pub book_id: i32,
    /// Zero-based order within the book
    pub position: i32,
    /// Number reported by the model
    pub number: Option<i32>,
    /// Chapter title
    pub title: &'a str,
    /// Chapter description
    pub description: &'a str,
    /// Estimated page count
    pub pages: Option<i32>,
}

/// A stored subchapter.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Getters)]
#[diesel(table_name = subchapters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubchapterRow {
    id: i32,
    chapter_id: i32,
    position: i32,
    number: Option<i32>,
    title: String,
    description: String,
    pages: Option<i32>,
}

/// Insertable form of [`SubchapterRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = subchapters)]
pub struct NewSubchapterRow<'a> {
    /// Owning chapter
    pub chapter_id: i32,
    /// Zero-based order within the chapter
    pub position: i32,
    /// Number reported by the model
    pub number: Option<i32>,
    /// Subchapter title
    pub title: &'a str,
    /// Subchapter description
    pub description: &'a str,
    /// Estimated page count
    pub pages: Option<i32>,
}

/// A stored section.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Getters)]
#[diesel(table_name = sections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SectionRow {
    id: i32,
    subchapter_id: i32,
    position: i32,
    number: Option<i32>,
    title: String,
    description: String,
    pages: Option<i32>,
    content: Option<String>,
}

/// Insertable form of [`SectionRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = sections)]
pub struct NewSectionRow<'a> {
    /// Owning subchapter
    pub subchapter_id: i32,
    /// Zero-based order within the subchapter
    pub position: i32,
    /// Number reported by the model
    pub number: Option<i32>,
    /// Section title
    pub title: &'a str,
    /// Section description
    pub description: &'a str,
    /// Estimated page count
    pub pages: Option<i32>,
    /// Body text
    pub content: Option<&'a str>,
}
