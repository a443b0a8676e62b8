//! SQLite-backed [`BookRepository`].

use crate::models::{
    BookRow, ChapterRow, NewBookRow, NewChapterRow, NewSectionRow, NewSubchapterRow, SectionRow,
    SubchapterRow,
};
use crate::schema::{books, chapters, sections, subchapters};
use crate::{BookRepository, BookSummary, DatabaseResult, establish_connection};
use async_trait::async_trait;
use bookwright_core::{Book, Chapter, Section, Subchapter};
use bookwright_error::{DatabaseError, DatabaseErrorKind};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::{Arc, Mutex};
use tracing::instrument;

/// Repository storing outlines in four normalized tables.
///
/// A single connection is shared behind a mutex; queries run on the blocking
/// thread pool.
#[derive(Clone)]
pub struct DieselBookRepository {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl std::fmt::Debug for DieselBookRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DieselBookRepository").finish_non_exhaustive()
    }
}

impl DieselBookRepository {
    /// Wrap an open connection. Migrations must already be applied.
    pub fn new(conn: SqliteConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open `database_url`, run migrations, and wrap the connection.
    pub fn connect(database_url: &str) -> DatabaseResult<Self> {
        establish_connection(database_url).map(Self::new)
    }

    async fn with_conn<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| {
                DatabaseError::new(DatabaseErrorKind::Connection(
                    "connection mutex poisoned".to_string(),
                ))
            })?;
            op(&mut guard)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    #[instrument(skip(self, book), fields(title = %book.title()))]
    async fn save_book(&self, book: &Book) -> DatabaseResult<i32> {
        let book = book.clone();
        let id = self.with_conn(move |conn| insert_book(conn, &book)).await?;
        tracing::info!(id, "Saved book");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn load_book(&self, id: i32) -> DatabaseResult<Book> {
        self.with_conn(move |conn| select_book(conn, id)).await
    }

    #[instrument(skip(self))]
    async fn list_books(&self) -> DatabaseResult<Vec<BookSummary>> {
        self.with_conn(select_summaries).await
    }
}

fn insert_book(conn: &mut SqliteConnection, book: &Book) -> DatabaseResult<i32> {
    conn.transaction::<i32, DatabaseError, _>(|conn| {
        let book_id: i32 = diesel::insert_into(books::table)
            .values(&NewBookRow {
                title: book.title(),
                subtitle: book.subtitle(),
                description: book.description(),
            })
            .returning(books::id)
            .get_result(conn)?;

        for (chapter_pos, chapter) in book.chapters().iter().enumerate() {
            let chapter_id: i32 = diesel::insert_into(chapters::table)
                .values(&NewChapterRow {
                    book_id,
                    position: to_column(chapter_pos)?,
                    number: to_nullable(*chapter.number()),
                    title: chapter.title(),
                    description: chapter.description(),
                    pages: to_nullable(*chapter.pages()),
                })
                .returning(chapters::id)
                .get_result(conn)?;

            for (sub_pos, sub) in chapter.subchapters().iter().enumerate() {
                let subchapter_id: i32 = diesel::insert_into(subchapters::table)
                    .values(&NewSubchapterRow {
                        chapter_id,
                        position: to_column(sub_pos)?,
                        number: to_nullable(*sub.number()),
                        title: sub.title(),
                        description: sub.description(),
                        pages: to_nullable(*sub.pages()),
                    })
                    .returning(subchapters::id)
                    .get_result(conn)?;

                let rows = sub
                    .sections()
                    .iter()
                    .enumerate()
                    .map(|(pos, section)| section_row(subchapter_id, pos, section))
                    .collect::<DatabaseResult<Vec<_>>>()?;

                if !rows.is_empty() {
                    diesel::insert_into(sections::table)
                        .values(&rows)
                        .execute(conn)?;
                }
            }
        }

        Ok(book_id)
    })
}

fn section_row(
    subchapter_id: i32,
    position: usize,
    section: &Section,
) -> DatabaseResult<NewSectionRow<'_>> {
    Ok(NewSectionRow {
        subchapter_id,
        position: to_column(position)?,
        number: to_nullable(*section.number()),
        title: section.title(),
        description: section.description(),
        pages: to_nullable(*section.pages()),
        content: section.content().as_deref(),
    })
}

fn select_book(conn: &mut SqliteConnection, id: i32) -> DatabaseResult<Book> {
    let row: BookRow = books::table
        .find(id)
        .select(BookRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound(format!("book {}", id))))?;

    let chapter_rows: Vec<ChapterRow> = chapters::table
        .filter(chapters::book_id.eq(id))
        .order(chapters::position.asc())
        .select(ChapterRow::as_select())
        .load(conn)?;

    let mut chapters = Vec::with_capacity(chapter_rows.len());
    for chapter_row in &chapter_rows {
        let subchapter_rows: Vec<SubchapterRow> = subchapters::table
            .filter(subchapters::chapter_id.eq(*chapter_row.id()))
            .order(subchapters::position.asc())
            .select(SubchapterRow::as_select())
            .load(conn)?;

        let mut subs = Vec::with_capacity(subchapter_rows.len());
        for sub_row in &subchapter_rows {
            let section_rows: Vec<SectionRow> = sections::table
                .filter(sections::subchapter_id.eq(*sub_row.id()))
                .order(sections::position.asc())
                .select(SectionRow::as_select())
                .load(conn)?;

            let sections = section_rows
                .iter()
                .map(section_from_row)
                .collect::<DatabaseResult<Vec<_>>>()?;
            subs.push(subchapter_from_row(sub_row, sections)?);
        }
        chapters.push(chapter_from_row(chapter_row, subs)?);
    }

    Book::builder()
        .id(*row.id())
        .title(row.title().as_str())
        .subtitle(row.subtitle().as_str())
        .description(row.description().as_str())
        .chapters(chapters)
        .build()
        .map_err(conversion)
}

fn select_summaries(conn: &mut SqliteConnection) -> DatabaseResult<Vec<BookSummary>> {
    let rows: Vec<BookRow> = books::table
        .order(books::id.asc())
        .select(BookRow::as_select())
        .load(conn)?;

    rows.iter()
        .map(|row| -> DatabaseResult<BookSummary> {
            let count: i64 = chapters::table
                .filter(chapters::book_id.eq(*row.id()))
                .count()
                .get_result(conn)?;
            Ok(BookSummary::new(
                *row.id(),
                row.title().clone(),
                row.subtitle().clone(),
                usize::try_from(count).map_err(conversion)?,
            ))
        })
        .collect()
}

fn chapter_from_row(row: &ChapterRow, subchapters: Vec<Subchapter>) -> DatabaseResult<Chapter> {
    let mut builder = Chapter::builder();
    builder
        .title(row.title().as_str())
        .description(row.description().as_str())
        .subchapters(subchapters);
    if let Some(number) = from_nullable(*row.number()) {
        builder.number(number);
    }
    if let Some(pages) = from_nullable(*row.pages()) {
        builder.pages(pages);
    }
    builder.build().map_err(conversion)
}

fn subchapter_from_row(row: &SubchapterRow, sections: Vec<Section>) -> DatabaseResult<Subchapter> {
    let mut builder = Subchapter::builder();
    builder
        .title(row.title().as_str())
        .description(row.description().as_str())
        .sections(sections);
    if let Some(number) = from_nullable(*row.number()) {
        builder.number(number);
    }
    if let Some(pages) = from_nullable(*row.pages()) {
        builder.pages(pages);
    }
    builder.build().map_err(conversion)
}

fn section_from_row(row: &SectionRow) -> DatabaseResult<Section> {
    let mut builder = Section::builder();
    builder
        .title(row.title().as_str())
        .description(row.description().as_str());
    if let Some(number) = from_nullable(*row.number()) {
        builder.number(number);
    }
    if let Some(pages) = from_nullable(*row.pages()) {
        builder.pages(pages);
    }
    if let Some(content) = row.content() {
        builder.content(content.as_str());
    }
    builder.build().map_err(conversion)
}

fn to_column(position: usize) -> DatabaseResult<i32> {
    i32::try_from(position).map_err(conversion)
}

// Counts past the column range are stored as absent.
fn to_nullable(value: Option<u32>) -> Option<i32> {
    value.and_then(|v| i32::try_from(v).ok())
}

// Negative counts cannot come from the outline model; treat them as absent.
fn from_nullable(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

#[track_caller]
fn conversion(err: impl std::fmt::Display) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Conversion(err.to_string()))
}
