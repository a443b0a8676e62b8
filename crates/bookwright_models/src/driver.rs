//! Transport seam for chat completions.

use crate::openai::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use bookwright_error::CompletionError;

/// Sends one chat request and returns the decoded response.
///
/// Implementations must not retry; failures are returned as-is.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Name used in logs.
    fn provider_name(&self) -> &'static str;

    /// Performs exactly one request.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError>;
}
