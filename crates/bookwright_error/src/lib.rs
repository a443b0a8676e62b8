//! Error types for the Bookwright outline generator.
//!
//! Every error struct records the file and line where it was created so that
//! failures surfacing in the web layer can be traced back to their origin.

mod completion;
mod config;
mod database;
mod outline;
mod server;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use outline::{OutlineError, OutlineErrorKind};
pub use server::{ServerError, ServerErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum BookwrightErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Database error
    Database(DatabaseError),
    /// Chat-completion error
    Completion(CompletionError),
    /// Outline payload error
    Outline(OutlineError),
    /// Web server error
    Server(ServerError),
}

impl std::fmt::Display for BookwrightErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookwrightErrorKind::Config(e) => write!(f, "{}", e),
            BookwrightErrorKind::Database(e) => write!(f, "{}", e),
            BookwrightErrorKind::Completion(e) => write!(f, "{}", e),
            BookwrightErrorKind::Outline(e) => write!(f, "{}", e),
            BookwrightErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Bookwright error with kind discrimination.
#[derive(Debug)]
pub struct BookwrightError(Box<BookwrightErrorKind>);

impl BookwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: BookwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BookwrightErrorKind {
        &self.0
    }
}

impl std::fmt::Display for BookwrightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bookwright Error: {}", self.0)
    }
}

impl std::error::Error for BookwrightError {}

// Generic From implementation for any type that converts to BookwrightErrorKind
impl<T> From<T> for BookwrightError
where
    T: Into<BookwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bookwright operations.
pub type BookwrightResult<T> = std::result::Result<T, BookwrightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conversion_keeps_variant() {
        let err: BookwrightError =
            CompletionError::new(CompletionErrorKind::InvalidArgument("t".into())).into();
        assert!(matches!(err.kind(), BookwrightErrorKind::Completion(_)));
    }

    #[test]
    fn test_location_is_recorded() {
        let err = OutlineError::new(OutlineErrorKind::MissingJson);
        assert!(err.file.ends_with("lib.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_upstream_classification() {
        assert!(CompletionErrorKind::Http("reset".into()).is_upstream());
        assert!(
            CompletionErrorKind::Api {
                status: 500,
                message: "boom".into()
            }
            .is_upstream()
        );
        assert!(!CompletionErrorKind::InvalidArgument("x".into()).is_upstream());
        assert!(!CompletionErrorKind::MissingApiKey.is_upstream());
    }
}
