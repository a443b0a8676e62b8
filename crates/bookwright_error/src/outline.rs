//! Outline payload error types.

/// Kinds of outline errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutlineErrorKind {
    /// The payload could not be read as a book outline
    #[display("Malformed outline payload: {}", _0)]
    MalformedPayload(String),
    /// The payload contained no JSON object at all
    #[display("No JSON object found in outline payload")]
    MissingJson,
}

/// Outline error with location tracking.
///
/// # Examples
///
/// ```
/// use bookwright_error::{OutlineError, OutlineErrorKind};
///
/// let err = OutlineError::new(OutlineErrorKind::MissingJson);
/// assert!(format!("{}", err).contains("No JSON object"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Outline Error: {} at line {} in {}", kind, line, file)]
pub struct OutlineError {
    /// The kind of error that occurred
    pub kind: OutlineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OutlineError {
    /// Create a new outline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutlineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
