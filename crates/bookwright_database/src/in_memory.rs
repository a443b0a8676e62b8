//! HashMap-backed [`BookRepository`].

use crate::{BookRepository, BookSummary, DatabaseResult};
use async_trait::async_trait;
use bookwright_core::Book;
use bookwright_error::{DatabaseError, DatabaseErrorKind};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository for book outlines.
///
/// All data is lost when the last clone is dropped.
///
/// # Example
///
/// ```
/// use bookwright_core::fixture_book;
/// use bookwright_database::{BookRepository, InMemoryBookRepository};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let repo = InMemoryBookRepository::new();
/// let id = repo.save_book(&fixture_book().unwrap()).await.unwrap();
/// assert_eq!(id, 1);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<BTreeMap<i32, Book>>>,
    next_id: Arc<RwLock<i32>>,
}

impl InMemoryBookRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn save_book(&self, book: &Book) -> DatabaseResult<i32> {
        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id = id + 1;

        self.books
            .write()
            .await
            .insert(id, book.clone().with_id(id));
        tracing::debug!(id, "Stored book in memory");
        Ok(id)
    }

    async fn load_book(&self, id: i32) -> DatabaseResult<Book> {
        self.books.read().await.get(&id).cloned().ok_or_else(|| {
            DatabaseError::new(DatabaseErrorKind::NotFound(format!("book {}", id)))
        })
    }

    async fn list_books(&self) -> DatabaseResult<Vec<BookSummary>> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .map(|(id, book)| {
                BookSummary::new(
                    *id,
                    book.title().clone(),
                    book.subtitle().clone(),
                    book.chapters().len(),
                )
            })
            .collect())
    }
}
