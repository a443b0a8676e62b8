//! Bookwright command-line entry point.

use bookwright::cli::{Cli, Commands, handle_generate_command, handle_show_command};
use bookwright_core::init_tracing;
use bookwright_server::{BookwrightConfig, serve};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing("info", cli.json_logs);
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = BookwrightConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::Generate(args) => {
            let output = handle_generate_command(config, args).await?;
            println!("{}", output);
        }
        Commands::Show { book_id } => {
            let output = handle_show_command(&config, book_id).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
