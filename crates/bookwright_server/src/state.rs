//! Shared state handed to every handler.

use crate::{BookwrightConfig, OutlineGenerator};
use bookwright_database::{BookRepository, DieselBookRepository};
use bookwright_error::BookwrightResult;
use bookwright_security::{Session, SessionGate, SessionStore};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Application state: the gate, live sessions, the outline generator and the
/// optional book store.
#[derive(Clone)]
pub struct AppState {
    gate: Arc<SessionGate>,
    sessions: SessionStore,
    generator: Arc<OutlineGenerator>,
    repository: Option<Arc<dyn BookRepository>>,
    cookie_name: Arc<str>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("generator", &self.generator)
            .field("persistence", &self.repository.is_some())
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assembles state from its parts.
    pub fn new(
        gate: SessionGate,
        generator: OutlineGenerator,
        repository: Option<Arc<dyn BookRepository>>,
        cookie_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            gate: Arc::new(gate),
            sessions: SessionStore::new(),
            generator: Arc::new(generator),
            repository,
            cookie_name: cookie_name.into(),
        }
    }

    /// Builds state from configuration, opening the database when
    /// `outline.persist` is set.
    pub fn from_config(config: &BookwrightConfig) -> BookwrightResult<Self> {
        let generator = OutlineGenerator::from_config(config)?;
        let repository: Option<Arc<dyn BookRepository>> = if *config.outline().persist() {
            info!(url = %config.database().url(), "Persisting outlines");
            Some(Arc::new(DieselBookRepository::connect(config.database().url())?))
        } else {
            None
        };

        Ok(Self::new(
            SessionGate::new(config.credentials().clone()),
            generator,
            repository,
            config.server().cookie_name().as_str(),
        ))
    }

    /// The credential gate.
    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// Live sessions.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// The outline generator.
    pub fn generator(&self) -> &OutlineGenerator {
        &self.generator
    }

    /// The book store, when persistence is enabled.
    pub fn repository(&self) -> Option<&Arc<dyn BookRepository>> {
        self.repository.as_ref()
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Looks up the session named by `id`, if any.
    pub async fn session(&self, id: Option<Uuid>) -> Option<(Uuid, Session)> {
        let id = id?;
        self.sessions.get(&id).await.map(|session| (id, session))
    }
}
