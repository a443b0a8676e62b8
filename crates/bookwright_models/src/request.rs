//! Completion request parameters and their validation.

use bookwright_error::{CompletionError, CompletionErrorKind};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
/// Default presence penalty.
pub const DEFAULT_PRESENCE_PENALTY: f32 = 0.0;

/// One completion call: prompt, optional system message, and sampling settings.
///
/// # Examples
///
/// ```
/// use bookwright_models::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .prompt("Outline a book about Rust")
///     .system_message("You are terse")
///     .temperature(0.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gpt-3.5-turbo");
/// assert_eq!(*request.presence_penalty(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// User prompt
    prompt: String,
    /// Sent before the prompt when present
    #[builder(default, setter(into, strip_option))]
    system_message: Option<String>,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Must lie in `[0, 2]`
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Must lie in `[-2, 2]`
    #[builder(default = "DEFAULT_PRESENCE_PENALTY")]
    presence_penalty: f32,
}

impl CompletionRequest {
    /// Returns a builder for constructing a CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Creates a request with default sampling settings.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_message: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            presence_penalty: DEFAULT_PRESENCE_PENALTY,
        }
    }

    /// Checks the sampling parameters against the API's accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionErrorKind::InvalidArgument`] for an out-of-range
    /// (or NaN) temperature or presence penalty.
    pub fn validate(&self) -> Result<(), CompletionError> {
        validate_sampling(self.temperature, self.presence_penalty)
    }
}

/// Validates `temperature ∈ [0, 2]` and `presence_penalty ∈ [-2, 2]`.
pub fn validate_sampling(temperature: f32, presence_penalty: f32) -> Result<(), CompletionError> {
    if !(0.0..=2.0).contains(&temperature) {
        return Err(CompletionError::new(CompletionErrorKind::InvalidArgument(
            format!("Temperature must be between 0 and 2, got {temperature}."),
        )));
    }
    if !(-2.0..=2.0).contains(&presence_penalty) {
        return Err(CompletionError::new(CompletionErrorKind::InvalidArgument(
            format!("Presence penalty must be between -2 and 2, got {presence_penalty}."),
        )));
    }
    Ok(())
}
