//! reqwest driver for the OpenAI chat-completions endpoint.

use crate::CompletionDriver;
use crate::openai::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use bookwright_error::{CompletionError, CompletionErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default chat-completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client for the OpenAI chat-completions API (or any compatible endpoint).
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAIClient {
    /// Creates a client for the public OpenAI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, OPENAI_CHAT_COMPLETIONS_URL)
    }

    /// Creates a client posting to `base_url`.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(url = %base_url, "Created OpenAI client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionErrorKind::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, CompletionError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(CompletionError::new(CompletionErrorKind::MissingApiKey)),
        }
    }

    /// Returns the endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionDriver for OpenAIClient {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        debug!(message_count = request.messages().len(), "Sending request");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                CompletionError::new(CompletionErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            CompletionError::new(CompletionErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            choices = chat_response.choices.len(),
            total_tokens = chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Received response"
        );
        Ok(chat_response)
    }
}
