//! Core data types for Bookwright.
//!
//! This crate holds the book outline model, the parser that turns model
//! replies into it, and the normalizer that reshapes an outline into the
//! generic tree the UI displays.

mod fixture;
mod lenient;
mod normalize;
mod observability;
mod outline;
mod payload;
mod prompt;
mod role;
mod tree;

pub use fixture::{FIXTURE_OUTLINE, fixture_book};
pub use lenient::MAX_COUNT;
pub use normalize::{describe, outline_to_tree};
pub use observability::init_tracing;
pub use outline::{
    Book, BookBuilder, BookBuilderError, Chapter, ChapterBuilder, ChapterBuilderError, Section,
    SectionBuilder, SectionBuilderError, Subchapter, SubchapterBuilder, SubchapterBuilderError,
};
pub use payload::{extract_json_object, parse_book};
pub use prompt::{DEFAULT_FORMATTING, DEFAULT_PERSONA, DEFAULT_STRUCTURE, OutlinePrompt};
pub use role::Role;
pub use tree::{TreeNode, count_nodes};
