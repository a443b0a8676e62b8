//! Validating completion client.

use crate::CompletionDriver;
use crate::CompletionRequest;
use crate::openai::{ChatMessage, ChatRequest};
use bookwright_error::{CompletionError, CompletionErrorKind};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Validates parameters, issues one chat request and returns the reply text.
#[derive(Clone)]
pub struct CompletionClient {
    driver: Arc<dyn CompletionDriver>,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("provider", &self.driver.provider_name())
            .finish()
    }
}

impl CompletionClient {
    /// Wraps a driver.
    pub fn new(driver: impl CompletionDriver + 'static) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    /// Wraps an already shared driver.
    pub fn from_shared(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }

    /// Returns the driver's provider name.
    pub fn provider_name(&self) -> &'static str {
        self.driver.provider_name()
    }

    /// Gets the completion for `request`.
    ///
    /// # Errors
    ///
    /// - [`CompletionErrorKind::InvalidArgument`] for out-of-range sampling
    ///   values; the driver is not called.
    /// - Whatever the driver returns for transport or API failures, unchanged.
    /// - [`CompletionErrorKind::ResponseParsing`] when the reply has no choices
    ///   or the first choice has no text.
    #[instrument(
        skip(self, request),
        fields(provider = self.driver.provider_name(), model = %request.model())
    )]
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        request.validate()?;
        info!(prompt = %request.prompt(), "Prompt");

        let chat_request = ChatRequest::builder()
            .model(request.model().clone())
            .messages(build_messages(
                request.prompt(),
                request.system_message().as_deref(),
            ))
            .temperature(*request.temperature())
            .presence_penalty(*request.presence_penalty())
            .build()
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::Builder(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.chat(&chat_request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                CompletionError::new(CompletionErrorKind::ResponseParsing(
                    "No choices in response".to_string(),
                ))
            })?
            .message
            .content
            .ok_or_else(|| {
                CompletionError::new(CompletionErrorKind::ResponseParsing(
                    "First choice has no content".to_string(),
                ))
            })?;

        debug!(response = %text, "Response");
        Ok(text)
    }
}

/// Orders the conversation: system message first when present, then the prompt.
pub fn build_messages(prompt: &str, system_message: Option<&str>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_message.filter(|s| !s.trim().is_empty()) {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(prompt));
    messages
}
