//! Route table and handlers.

use crate::cookie::{session_cookie, session_id};
use crate::pages::{hello_page, layout_page, login_page, render_tree};
use crate::{ApiError, AppState};
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use bookwright_core::{Book, OutlinePrompt, TreeNode, outline_to_tree};
use bookwright_database::BookSummary;
use bookwright_security::{LoginOutcome, Session};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_form).post(login))
        .route("/page_layout", get(page_layout))
        .route("/api/outline", post(generate_outline))
        .route("/api/books", get(list_books))
        .route("/api/books/:id/tree", get(book_tree))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// Body returned for a generated or loaded outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineResponse {
    /// Display tree (a single root)
    pub tree: Vec<TreeNode>,
    /// The tree rendered as nested `<details>`
    pub html: String,
    /// Storage id, when the outline was persisted
    pub book_id: Option<i32>,
}

impl OutlineResponse {
    fn from_book(book: &Book, book_id: Option<i32>) -> Self {
        let tree = outline_to_tree(book);
        let html = render_tree(&tree);
        Self {
            tree,
            html,
            book_id,
        }
    }
}

async fn current_user(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let (_, session) = state
        .session(session_id(headers, state.cookie_name()))
        .await?;
    session
        .is_authenticated()
        .then(|| session.username().clone())
        .flatten()
}

#[instrument(skip_all)]
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match current_user(&state, &headers).await {
        Some(username) => Html(hello_page(&username)).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

#[instrument(skip_all)]
async fn login_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match current_user(&state, &headers).await {
        Some(_) => Redirect::to("/").into_response(),
        None => Html(login_page(None)).into_response(),
    }
}

#[instrument(skip_all)]
async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let existing = state
        .session(session_id(&headers, state.cookie_name()))
        .await;
    let (id, mut session) = match existing {
        Some((id, session)) => (Some(id), session),
        None => (None, Session::anonymous()),
    };

    let outcome = state
        .gate()
        .login(&mut session, &form.username, &form.password);

    // Anonymous visitors only get a session once they authenticate.
    let id = match (id, &outcome) {
        (Some(id), _) => Some(id),
        (None, LoginOutcome::Authenticated { .. }) => Some(state.sessions().create().await),
        (None, LoginOutcome::Rejected { .. }) => None,
    };
    let cookie = match id {
        Some(id) => {
            state.sessions().put(id, session).await;
            Some([(SET_COOKIE, session_cookie(state.cookie_name(), id))])
        }
        None => None,
    };

    match outcome {
        LoginOutcome::Authenticated { .. } => (cookie, Redirect::to("/")).into_response(),
        LoginOutcome::Rejected { notice } => (
            StatusCode::UNAUTHORIZED,
            cookie,
            Html(login_page(Some(notice))),
        )
            .into_response(),
    }
}

#[instrument(skip_all)]
async fn page_layout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match current_user(&state, &headers).await {
        Some(username) => Html(layout_page(&username, &OutlinePrompt::default())).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

#[instrument(skip_all)]
async fn generate_outline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(prompt): Json<OutlinePrompt>,
) -> Result<Json<OutlineResponse>, ApiError> {
    let username = current_user(&state, &headers)
        .await
        .ok_or(ApiError::Unauthorized)?;

    let book = state.generator().generate(&prompt).await?;
    let book_id = match state.repository() {
        Some(repository) => Some(repository.save_book(&book).await?),
        None => None,
    };

    info!(%username, ?book_id, "Outline ready");
    Ok(Json(OutlineResponse::from_book(&book, book_id)))
}

#[instrument(skip_all)]
async fn list_books(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookSummary>>, ApiError> {
    current_user(&state, &headers)
        .await
        .ok_or(ApiError::Unauthorized)?;
    let repository = state
        .repository()
        .ok_or_else(|| ApiError::NotFound("persistence is disabled".to_string()))?;

    Ok(Json(repository.list_books().await?))
}

#[instrument(skip_all)]
async fn book_tree(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<Json<OutlineResponse>, ApiError> {
    current_user(&state, &headers)
        .await
        .ok_or(ApiError::Unauthorized)?;
    let repository = state
        .repository()
        .ok_or_else(|| ApiError::NotFound("persistence is disabled".to_string()))?;

    let book = repository.load_book(id).await?;
    Ok(Json(OutlineResponse::from_book(&book, Some(id))))
}

#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
