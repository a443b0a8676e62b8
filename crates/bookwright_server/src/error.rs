//! HTTP mapping for handler failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookwright_error::{
    BookwrightError, BookwrightErrorKind, CompletionErrorKind, DatabaseError, DatabaseErrorKind,
};
use serde_json::json;
use tracing::{error, warn};

/// Error returned by the JSON API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// No authenticated session
    Unauthorized,
    /// The requested resource does not exist
    NotFound(String),
    /// A lower layer failed
    Failed(BookwrightError),
}

impl ApiError {
    /// Status code sent for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Failed(err) => match err.kind() {
                BookwrightErrorKind::Completion(e) => match &e.kind {
                    CompletionErrorKind::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    kind if kind.is_upstream() => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
                BookwrightErrorKind::Outline(_) => StatusCode::BAD_GATEWAY,
                BookwrightErrorKind::Database(e) => match e.kind {
                    DatabaseErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// User-facing message, without source locations.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Authentication required".to_string(),
            ApiError::NotFound(what) => format!("Not found: {}", what),
            ApiError::Failed(err) => match err.kind() {
                BookwrightErrorKind::Completion(e) => e.kind.to_string(),
                BookwrightErrorKind::Outline(e) => e.kind.to_string(),
                BookwrightErrorKind::Database(e) => e.kind.to_string(),
                BookwrightErrorKind::Server(e) => e.kind.to_string(),
                BookwrightErrorKind::Config(e) => e.message.clone(),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<BookwrightError> for ApiError {
    fn from(err: BookwrightError) -> Self {
        ApiError::Failed(err)
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Failed(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Failed(err) if status.is_server_error() => error!(error = %err, "Request failed"),
            _ => warn!(status = status.as_u16(), error = %self.message(), "Request rejected"),
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
