//! Shared-secret cookie authentication and the login/logout routes.

use std::sync::Arc;

use axum::Form;
use axum::extract::{FromRequestParts, State};
use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use serde::Deserialize;

use super::{AppState, WebError};
use crate::infra::{digests_match, hash_password};

/// Name of the cookie carrying the password digest.
pub const AUTH_COOKIE: &str = "auth";

/// One year, in seconds.
const AUTH_COOKIE_MAX_AGE: u64 = 31_536_000;

/// Per-request view of the visitor: whether they're logged in, and which
/// path they asked for.
#[derive(Debug, Clone)]
pub struct Session {
    pub authenticated: bool,
    pub path: String,
}

impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let presented = cookie(&parts.headers, AUTH_COOKIE);
        let authenticated = match (state.password_hash.as_deref(), presented) {
            (Some(expected), Some(presented)) => digests_match(expected, presented),
            _ => false,
        };
        Ok(Session {
            authenticated,
            path: parts.uri.path().to_string(),
        })
    }
}

/// Finds a cookie value by name across all `Cookie` headers.
pub(crate) fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// The response every write route gives a visitor who isn't logged in.
pub(crate) fn login_required() -> Response {
    Redirect::to("/login").into_response()
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    key: String,
}

pub async fn login_form(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    if session.authenticated {
        return Ok(Redirect::to("/").into_response());
    }
    let html = state.render("login.html", &session, context! {})?;
    Ok(Html(html).into_response())
}

pub async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let Some(expected) = state.password_hash.as_deref() else {
        tracing::warn!("login attempted but no password hash is configured");
        return Redirect::to("/login").into_response();
    };

    if !digests_match(expected, &hash_password(&form.key)) {
        tracing::warn!("login failed: wrong password");
        return Redirect::to("/login").into_response();
    }

    tracing::info!("login succeeded");
    let cookie = format!(
        "{AUTH_COOKIE}={expected}; Max-Age={AUTH_COOKIE_MAX_AGE}; Path=/; HttpOnly; SameSite=Lax"
    );
    ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

pub async fn logout() -> Response {
    let cookie = format!("{AUTH_COOKIE}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax");
    ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}
