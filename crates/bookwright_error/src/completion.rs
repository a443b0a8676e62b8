//! Chat-completion error types.

/// Chat-completion error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// A sampling parameter was out of range; no request was sent
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),
    /// No API key was configured
    #[display("OPENAI_API_KEY not set and no completion.api_key configured")]
    MissingApiKey,
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Failed to decode the response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl CompletionErrorKind {
    /// Whether the failure came from the remote side rather than the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CompletionErrorKind::Http(_)
                | CompletionErrorKind::Api { .. }
                | CompletionErrorKind::ResponseParsing(_)
        )
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use bookwright_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::InvalidArgument(
///     "Temperature must be between 0 and 2.".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Temperature"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new completion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
