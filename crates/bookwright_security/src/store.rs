//! In-memory session store keyed by cookie id.

use crate::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Sessions keyed by a random id handed to the browser as a cookie.
///
/// All data is lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new anonymous session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, Session::anonymous());
        debug!(session = %id, "Created session");
        id
    }

    /// Returns a copy of the session, if known.
    pub async fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Stores `session` under `id`, replacing any previous state.
    pub async fn put(&self, id: Uuid, session: Session) {
        self.sessions.write().await.insert(id, session);
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no session exists.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
