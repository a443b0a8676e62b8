//! Static username → password table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Username → password table checked by plain string equality.
///
/// Passwords are stored and compared in clear text. This is only suitable for
/// a local demonstration.
///
/// # Examples
///
/// ```
/// use bookwright_security::CredentialTable;
///
/// let table = CredentialTable::from_iter([("m", "p")]);
/// assert!(table.verify("m", "p"));
/// assert!(!table.verify("m", "wrong"));
/// assert!(!table.verify("nobody", "p"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    /// Creates a table from an existing map.
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// True when `username` exists and its password equals `password`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }

    /// Number of configured users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no user can log in.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<U, P> FromIterator<(U, P)> for CredentialTable
where
    U: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, P)>>(iter: I) -> Self {
        Self {
            users: iter
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }
}
