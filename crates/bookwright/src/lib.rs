//! Bookwright: generate book outlines with a chat-completion model and browse
//! them as an expandable tree.
//!
//! This crate re-exports the workspace crates and hosts the command-line
//! handlers behind the `bookwright` binary.
//!
//! # Example
//!
//! ```
//! use bookwright::{fixture_book, outline_to_tree};
//!
//! let book = fixture_book().unwrap();
//! let tree = outline_to_tree(&book);
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree[0].child_nodes().len(), 3);
//! ```

pub mod cli;

pub use bookwright_core::*;
pub use bookwright_database::{
    BookRepository, BookSummary, DatabaseResult, DieselBookRepository, InMemoryBookRepository,
    establish_connection,
};
pub use bookwright_error::*;
pub use bookwright_models::{
    CompletionClient, CompletionDriver, CompletionRequest, OpenAIClient, build_messages,
    validate_sampling,
};
pub use bookwright_security::{
    CredentialTable, LoginOutcome, Session, SessionGate, SessionStore, WRONG_CREDENTIALS_NOTICE,
};
pub use bookwright_server::{
    ApiError, AppState, BookwrightConfig, OutlineGenerator, OutlineSource, create_router, serve,
};
