//! Page handlers: listing, single note, search, feed, and the write routes.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Utc;
use minijinja::context;
use serde::Deserialize;

use super::auth::{Session, login_required};
use super::templates::NoteView;
use super::{AppState, WebError};
use crate::domain::{Note, NoteId, paginate};
use crate::infra::StoreError;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    p: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    url: String,
    title: String,
    quote: String,
    note: String,
    id: String,
}

// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, WebError> {
    let notes = state.store.snapshot();
    let entries: Vec<_> = notes.iter().collect();
    let page = paginate(&entries, query.p.unwrap_or(1), state.settings.page_size);

    let html = state.render(
        "index.html",
        &session,
        context! {
            notes => NoteView::list(page.items),
            page => page.number,
            pages => page.total_pages,
            has_previous => page.has_previous(),
            has_next => page.has_next(),
        },
    )?;
    Ok(Html(html))
}

// GET /note/{id}
pub async fn show_note(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id: NoteId = id.parse().map_err(|_| WebError::NotFound)?;
    let notes = state.store.snapshot();
    let note = notes.get(&id).ok_or(WebError::NotFound)?;
    let neighbors = notes.neighbors(&id);

    let html = state.render(
        "note.html",
        &session,
        context! {
            note => NoteView::new(&id, note),
            previous_id => neighbors.previous.map(|id| id.to_string()),
            next_id => neighbors.next.map(|id| id.to_string()),
        },
    )?;
    Ok(Html(html))
}

// GET /search?q=
pub async fn search(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, WebError> {
    let notes = state.store.snapshot();
    let results = notes.search(&query.q);

    let label = if query.q.is_empty() {
        format!("{} recent notes", results.len())
    } else {
        format!("{} notes matching", results.len())
    };
    let shown = &results[..results.len().min(state.settings.search_limit)];

    let html = state.render(
        "search.html",
        &session,
        context! {
            results => NoteView::list(shown),
            q => query.q,
            label => label,
        },
    )?;
    Ok(Html(html))
}

// GET /rss
pub async fn rss(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let notes = state.store.snapshot();
    let latest = notes.latest(state.settings.feed_limit);
    let last_build = notes
        .newest_id()
        .map(|id| id.as_secs())
        .unwrap_or_else(|| u64::try_from(Utc::now().timestamp()).unwrap_or(0));

    let xml = state.render(
        "rss.xml",
        &session,
        context! {
            notes => NoteView::list(&latest),
            last_build => last_build,
        },
    )?;
    Ok(([(CONTENT_TYPE, "application/rss+xml; charset=utf-8")], xml).into_response())
}

// GET /edit?id=
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(query): Query<EditQuery>,
) -> Result<Response, WebError> {
    if !session.authenticated {
        return Ok(login_required());
    }

    let notes = state.store.snapshot();
    let id = query
        .id
        .as_deref()
        .and_then(|raw| NoteId::parse_optional(raw).ok().flatten());
    let blank = Note::default();
    let note = id.and_then(|id| notes.get(&id)).unwrap_or(&blank);

    let html = state.render(
        "edit.html",
        &session,
        context! {
            note => note,
            id => id.map(|id| id.to_string()).unwrap_or_default(),
        },
    )?;
    Ok(Html(html).into_response())
}

// POST /edit
pub async fn edit(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<EditForm>,
) -> Result<Response, WebError> {
    if !session.authenticated {
        return Ok(login_required());
    }

    let id = NoteId::parse_optional(&form.id).map_err(|e| WebError::BadRequest(e.to_string()))?;
    let note = Note::new(form.url, form.title, form.quote, form.note);

    let store_state = Arc::clone(&state);
    let id = blocking(move || store_state.store.upsert(id, note)).await?;
    tracing::info!(id = %id, "note saved");

    Ok(Redirect::to(&format!("/note/{id}")).into_response())
}

// POST /delete/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    if !session.authenticated {
        return Ok(login_required());
    }

    if let Ok(id) = id.parse::<NoteId>() {
        let store_state = Arc::clone(&state);
        if blocking(move || store_state.store.delete(&id)).await? {
            tracing::info!(id = %id, "note deleted");
        }
    }

    Ok(Redirect::to("/").into_response())
}

// GET /static/style.css
pub async fn stylesheet(State(state): State<Arc<AppState>>) -> Response {
    (
        [(CONTENT_TYPE, "text/css; charset=utf-8")],
        state.settings.stylesheet.clone(),
    )
        .into_response()
}

pub async fn not_found() -> WebError {
    WebError::NotFound
}

/// Runs a store write off the async executor.
async fn blocking<T, F>(write: F) -> Result<T, WebError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    Ok(tokio::task::spawn_blocking(write).await??)
}
