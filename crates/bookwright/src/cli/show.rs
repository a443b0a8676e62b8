//! Show command handler.

use bookwright_core::outline_to_tree;
use bookwright_database::{BookRepository, DieselBookRepository};
use bookwright_server::BookwrightConfig;
use serde_json::json;

/// Loads a saved outline and returns `{book_id, tree}` as pretty JSON.
#[tracing::instrument(skip(config))]
pub async fn handle_show_command(config: &BookwrightConfig, book_id: i32) -> anyhow::Result<String> {
    let repository = DieselBookRepository::connect(config.database().url())?;
    let book = repository.load_book(book_id).await?;

    let output = json!({ "book_id": book_id, "tree": outline_to_tree(&book) });
    Ok(serde_json::to_string_pretty(&output)?)
}
