//! Login check against the credential table.

use crate::{CredentialTable, Session};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Notice shown when a login attempt fails.
pub const WRONG_CREDENTIALS_NOTICE: &str = "Wrong username or password";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session is now authenticated as `username`.
    Authenticated {
        /// Recorded username
        username: String,
    },
    /// Credentials did not match; the session was left untouched.
    Rejected {
        /// User-visible notice
        notice: &'static str,
    },
}

impl LoginOutcome {
    /// True for [`LoginOutcome::Authenticated`].
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated { .. })
    }
}

/// Gates access to the application pages.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct SessionGate {
    credentials: CredentialTable,
}

impl SessionGate {
    /// Checks `username`/`password` and updates `session` on success.
    ///
    /// On mismatch the session keeps whatever state it had, including an
    /// earlier successful login.
    #[instrument(skip(self, session, password))]
    pub fn login(&self, session: &mut Session, username: &str, password: &str) -> LoginOutcome {
        if self.credentials.verify(username, password) {
            session.authenticate(username);
            info!("Login succeeded");
            LoginOutcome::Authenticated {
                username: username.to_string(),
            }
        } else {
            warn!("Login rejected");
            LoginOutcome::Rejected {
                notice: WRONG_CREDENTIALS_NOTICE,
            }
        }
    }
}
