//! Persistence for generated book outlines.
//!
//! Outlines are stored in SQLite across four tables (books, chapters,
//! subchapters, sections) with embedded diesel migrations. The
//! [`BookRepository`] trait keeps storage out of the web layer; an in-memory
//! implementation serves tests and persistence-less deployments.

#![warn(missing_docs)]

// Links the bundled SQLite build.
use libsqlite3_sys as _;

mod connection;
mod diesel_repository;
mod in_memory;
mod models;
mod repository;
#[allow(missing_docs)]
pub mod schema;

pub use connection::{MIGRATIONS, establish_connection};
pub use diesel_repository::DieselBookRepository;
pub use in_memory::InMemoryBookRepository;
pub use models::{
    BookRow, ChapterRow, NewBookRow, NewChapterRow, NewSectionRow, NewSubchapterRow, SectionRow,
    SubchapterRow,
};
pub use repository::{BookRepository, BookSummary};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, bookwright_error::DatabaseError>;
