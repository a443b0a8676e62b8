//! Storage interface for generated outlines.

use crate::DatabaseResult;
use async_trait::async_trait;
use bookwright_core::Book;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Listing entry for a stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct BookSummary {
    id: i32,
    title: String,
    subtitle: String,
    chapter_count: usize,
}

/// Persists book outlines.
///
/// Implementations keep chapter, subchapter and section order exactly as
/// saved.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Store a book and return its new identifier.
    async fn save_book(&self, book: &Book) -> DatabaseResult<i32>;

    /// Load a previously stored book, tagged with its identifier.
    ///
    /// Fails with `DatabaseErrorKind::NotFound` when no book has that id.
    async fn load_book(&self, id: i32) -> DatabaseResult<Book>;

    /// List stored books, oldest first.
    async fn list_books(&self) -> DatabaseResult<Vec<BookSummary>>;
}
