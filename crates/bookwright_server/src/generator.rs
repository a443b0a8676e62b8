//! Produces book outlines from a prompt.

use crate::{BookwrightConfig, CompletionSettings};
use bookwright_core::{Book, OutlinePrompt, fixture_book, parse_book};
use bookwright_error::{BookwrightResult, CompletionError, CompletionErrorKind};
use bookwright_models::{CompletionClient, OpenAIClient};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Where outlines come from.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutlineSource {
    /// Ask the chat-completion model
    #[default]
    Model,
    /// Return the bundled sample outline
    Fixture,
}

#[derive(Debug, Clone)]
enum Backend {
    Fixture,
    Model {
        client: CompletionClient,
        settings: CompletionSettings,
    },
}

/// Turns an [`OutlinePrompt`] into a [`Book`].
#[derive(Debug, Clone)]
pub struct OutlineGenerator {
    backend: Backend,
}

impl OutlineGenerator {
    /// Generator that always returns the bundled outline.
    pub fn fixture() -> Self {
        Self {
            backend: Backend::Fixture,
        }
    }

    /// Generator backed by `client`, sampling with `settings`.
    pub fn with_client(client: CompletionClient, settings: CompletionSettings) -> Self {
        Self {
            backend: Backend::Model { client, settings },
        }
    }

    /// Builds the generator selected by `outline.source`.
    ///
    /// # Errors
    ///
    /// The model source needs an API key, from `completion.api_key` or
    /// `OPENAI_API_KEY`; without one this fails with
    /// [`CompletionErrorKind::MissingApiKey`].
    pub fn from_config(config: &BookwrightConfig) -> BookwrightResult<Self> {
        match config.outline().source() {
            OutlineSource::Fixture => Ok(Self::fixture()),
            OutlineSource::Model => {
                let settings = config.completion();
                let api_key = settings
                    .resolve_api_key()
                    .ok_or_else(|| CompletionError::new(CompletionErrorKind::MissingApiKey))?;
                let driver = OpenAIClient::with_base_url(api_key, settings.base_url().as_str());
                Ok(Self::with_client(
                    CompletionClient::new(driver),
                    settings.clone(),
                ))
            }
        }
    }

    /// The configured source.
    pub fn source(&self) -> OutlineSource {
        match self.backend {
            Backend::Fixture => OutlineSource::Fixture,
            Backend::Model { .. } => OutlineSource::Model,
        }
    }

    /// Generates one outline.
    ///
    /// The model source makes exactly one completion call and parses the
    /// reply; a reply that is not an outline is an error, never replaced by
    /// the fixture.
    #[instrument(skip(self, prompt), fields(source = %self.source()))]
    pub async fn generate(&self, prompt: &OutlinePrompt) -> BookwrightResult<Book> {
        let book = match &self.backend {
            Backend::Fixture => fixture_book()?,
            Backend::Model { client, settings } => {
                let request = settings.request(prompt.compose())?;
                let reply = client.complete(&request).await?;
                parse_book(&reply)?
            }
        };

        info!(
            title = %book.title(),
            chapters = book.chapters().len(),
            sections = book.section_count(),
            "Generated outline"
        );
        Ok(book)
    }
}
