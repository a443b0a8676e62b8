//! Argument definitions.

use bookwright_server::OutlineSource;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Book outline generator.
#[derive(Parser, Debug)]
#[command(name = "bookwright")]
#[command(about = "Generate book outlines and browse them as a tree")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./bookwright.toml when present)
    #[arg(short, long, global = true, env = "BOOKWRIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve,

    /// Generate one outline and print its tree as JSON
    Generate(GenerateArgs),

    /// Print the tree of a saved outline as JSON
    Show {
        /// Identifier printed by `generate --save`
        #[arg(long)]
        book_id: i32,
    },
}

/// Options for `bookwright generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Outline source, overriding `outline.source`
    #[arg(long)]
    pub source: Option<OutlineSource>,

    /// Who the author is
    #[arg(long)]
    pub persona: Option<String>,

    /// What book to outline
    #[arg(long)]
    pub structure: Option<String>,

    /// How the answer must be formatted
    #[arg(long)]
    pub formatting: Option<String>,

    /// Save the outline to the configured database
    #[arg(long)]
    pub save: bool,
}
