//! Status codes and messages for API failures.

use axum::http::StatusCode;
use bookwright_error::{
    BookwrightError, CompletionError, CompletionErrorKind, DatabaseError, DatabaseErrorKind,
    OutlineError, OutlineErrorKind,
};
use bookwright_server::ApiError;

fn failed(err: impl Into<BookwrightError>) -> ApiError {
    ApiError::Failed(err.into())
}

#[test]
fn test_status_mapping() {
    let invalid = failed(CompletionError::new(CompletionErrorKind::InvalidArgument(
        "temperature".into(),
    )));
    let upstream = failed(CompletionError::new(CompletionErrorKind::Api {
        status: 500,
        message: "boom".into(),
    }));
    let malformed = failed(OutlineError::new(OutlineErrorKind::MissingJson));
    let missing = failed(DatabaseError::new(DatabaseErrorKind::NotFound("book 3".into())));
    let no_key = failed(CompletionError::new(CompletionErrorKind::MissingApiKey));

    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(malformed.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(no_key.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_message_hides_source_location() {
    let err = failed(OutlineError::new(OutlineErrorKind::MissingJson));
    assert!(!err.message().contains(".rs"));
}
