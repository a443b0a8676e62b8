//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the bookwright binary.

mod commands;
mod generate;
mod show;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::handle_generate_command;
pub use show::handle_show_command;
