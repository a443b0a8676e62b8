//! Application configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `BOOKWRIGHT__SECTION__KEY` environment variables.

use crate::OutlineSource;
use ::config::builder::{ConfigBuilder, DefaultState};
use ::config::{Config, Environment, File, FileFormat};
use bookwright_error::{CompletionError, CompletionErrorKind, ConfigError};
use bookwright_models::openai::OPENAI_CHAT_COMPLETIONS_URL;
use bookwright_models::{
    CompletionRequest, DEFAULT_MODEL, DEFAULT_PRESENCE_PENALTY, DEFAULT_TEMPERATURE,
};
use bookwright_security::CredentialTable;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bookwright.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BOOKWRIGHT";

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use bookwright_server::{BookwrightConfig, OutlineSource};
///
/// let config = BookwrightConfig::from_toml_str(
///     r#"
///     [outline]
///     source = "fixture"
///
///     [credentials]
///     m = "p"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(*config.outline().source(), OutlineSource::Fixture);
/// assert_eq!(*config.server().port(), 8080);
/// assert!(config.credentials().verify("m", "p"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct BookwrightConfig {
    server: ServerSettings,
    completion: CompletionSettings,
    outline: OutlineSettings,
    database: DatabaseSettings,
    credentials: CredentialTable,
}

impl BookwrightConfig {
    /// Loads configuration from `path`, or from `bookwright.toml` in the
    /// working directory when it exists, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Fails when an explicit `path` is missing or any source does not parse.
    #[instrument(name = "config.load")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );
        let config = Self::build(builder)?;
        debug!(
            address = %config.server.address(),
            source = %config.outline.source,
            persist = config.outline.persist,
            users = config.credentials.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Returns the same configuration with `outline.source` replaced.
    pub fn with_source(mut self, source: OutlineSource) -> Self {
        self.outline.source = source;
        self
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ServerSettings {
    host: String,
    port: u16,
    /// Name of the cookie carrying the session id
    cookie_name: String,
}

impl ServerSettings {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cookie_name: "bookwright_session".to_string(),
        }
    }
}

/// Chat-completion settings applied to every outline request.
#[derive(Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct CompletionSettings {
    base_url: String,
    model: String,
    temperature: f32,
    presence_penalty: f32,
    system_message: Option<String>,
    api_key: Option<String>,
}

impl std::fmt::Debug for CompletionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("presence_penalty", &self.presence_penalty)
            .field("system_message", &self.system_message)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            presence_penalty: DEFAULT_PRESENCE_PENALTY,
            system_message: None,
            api_key: None,
        }
    }
}

impl CompletionSettings {
    /// The configured key, or `OPENAI_API_KEY` from the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var("OPENAI_API_KEY").ok().filter(present))
    }

    /// Builds a request for `prompt` with these sampling parameters.
    pub fn request(&self, prompt: impl Into<String>) -> Result<CompletionRequest, CompletionError> {
        let mut builder = CompletionRequest::builder();
        builder
            .prompt(prompt)
            .model(self.model.as_str())
            .temperature(self.temperature)
            .presence_penalty(self.presence_penalty);
        if let Some(system) = &self.system_message {
            builder.system_message(system.as_str());
        }
        builder
            .build()
            .map_err(|e| CompletionError::new(CompletionErrorKind::Builder(e.to_string())))
    }
}

/// Where outlines come from and whether they are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct OutlineSettings {
    source: OutlineSource,
    /// Save every generated outline to the database
    persist: bool,
}

/// Relational store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path, or `:memory:`
    url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "content.db".to_string(),
        }
    }
}
