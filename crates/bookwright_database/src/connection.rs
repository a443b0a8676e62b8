//! Database connection utilities.

use crate::DatabaseResult;
use bookwright_error::{DatabaseError, DatabaseErrorKind};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::instrument;

/// Migrations bundled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open a SQLite database and bring its schema up to date.
///
/// `database_url` is a file path or `:memory:`.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - A pending migration fails
#[instrument(name = "database.establish_connection")]
pub fn establish_connection(database_url: &str) -> DatabaseResult<SqliteConnection> {
    tracing::debug!("Connecting to SQLite database");
    let mut conn = SqliteConnection::establish(database_url).map_err(|e| {
        tracing::error!(error = %e, "Failed to establish database connection");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })?;

    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!(error = %e, "Failed to run migrations");
        DatabaseError::new(DatabaseErrorKind::Migration(e.to_string()))
    })?;
    tracing::debug!(count = applied.len(), "Applied pending migrations");

    Ok(conn)
}
