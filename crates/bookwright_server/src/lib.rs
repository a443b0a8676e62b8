//! Web surface for Bookwright.
//!
//! Configuration loading, the outline generator (model or bundled fixture),
//! and the axum application: login gate, outline builder page and JSON API.

#![warn(missing_docs)]

mod config;
mod cookie;
mod error;
mod generator;
mod pages;
mod routes;
mod server;
mod state;

pub use self::config::{
    BookwrightConfig, CompletionSettings, DEFAULT_CONFIG_FILE, DatabaseSettings, ENV_PREFIX,
    OutlineSettings, ServerSettings,
};
pub use cookie::{session_cookie, session_id};
pub use error::ApiError;
pub use generator::{OutlineGenerator, OutlineSource};
pub use pages::{hello_page, layout_page, login_page, render_tree};
pub use routes::{LoginForm, OutlineResponse, create_router};
pub use server::serve;
pub use state::AppState;
