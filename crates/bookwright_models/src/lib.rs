//! Chat-completion client for Bookwright.
//!
//! [`CompletionClient`] validates sampling parameters and shapes the message
//! list; the actual transport sits behind [`CompletionDriver`] so tests can
//! substitute a stub for [`OpenAIClient`].

mod client;
mod driver;
pub mod openai;
mod request;

pub use client::{CompletionClient, build_messages};
pub use driver::CompletionDriver;
pub use openai::OpenAIClient;
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError, DEFAULT_MODEL,
    DEFAULT_PRESENCE_PENALTY, DEFAULT_TEMPERATURE, validate_sampling,
};
