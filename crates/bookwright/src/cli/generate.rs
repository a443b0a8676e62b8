//! Generate command handler.

use super::GenerateArgs;
use bookwright_core::{OutlinePrompt, outline_to_tree};
use bookwright_database::{BookRepository, DieselBookRepository};
use bookwright_server::{BookwrightConfig, OutlineGenerator};
use serde_json::json;

/// Generates one outline and returns `{book_id, tree}` as pretty JSON.
///
/// Prompt fields left unset fall back to the defaults shown on the web page.
#[tracing::instrument(skip_all, fields(save = args.save))]
pub async fn handle_generate_command(
    config: BookwrightConfig,
    args: GenerateArgs,
) -> anyhow::Result<String> {
    let config = match args.source {
        Some(source) => config.with_source(source),
        None => config,
    };

    let defaults = OutlinePrompt::default();
    let prompt = OutlinePrompt::new(
        args.persona.unwrap_or_else(|| defaults.persona().clone()),
        args.structure.unwrap_or_else(|| defaults.structure().clone()),
        args.formatting.unwrap_or_else(|| defaults.formatting().clone()),
    );

    let book = OutlineGenerator::from_config(&config)?
        .generate(&prompt)
        .await?;

    let book_id = if args.save {
        let repository = DieselBookRepository::connect(config.database().url())?;
        let id = repository.save_book(&book).await?;
        tracing::info!(id, url = %config.database().url(), "Saved outline");
        Some(id)
    } else {
        None
    };

    let output = json!({ "book_id": book_id, "tree": outline_to_tree(&book) });
    Ok(serde_json::to_string_pretty(&output)?)
}
