//! Per-browser session state.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Session state: anonymous until a login succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Session {
    /// Set by the first successful login
    authenticated: bool,
    /// Username of the latest successful login
    username: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether a login has succeeded on this session.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn authenticate(&mut self, username: &str) {
        self.authenticated = true;
        self.username = Some(username.to_string());
    }
}
