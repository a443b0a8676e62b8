//! Credential check and session state for Bookwright.
//!
//! The gate is a two-state machine per session: anonymous, then
//! authenticated after a matching username/password pair. There is no
//! transition back to anonymous.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod credentials;
mod gate;
mod session;
mod store;

pub use credentials::CredentialTable;
pub use gate::{LoginOutcome, SessionGate, WRONG_CREDENTIALS_NOTICE};
pub use session::Session;
pub use store::SessionStore;
