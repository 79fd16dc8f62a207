//! HTTP front end: routes, templates, and cookie auth over a [`CachedStore`].

mod auth;
mod error;
mod handlers;
mod markdown;
pub mod templates;
mod theme;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use chrono::{Datelike, Utc};
use minijinja::context;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::infra::CachedStore;

pub use auth::{AUTH_COOKIE, Session};
pub use error::WebError;
pub use markdown::markdown_to_html;
pub use templates::Templates;
pub use theme::{THEME_DARK, THEME_DEFAULT, load_stylesheet};

/// Presentation settings shared by every page.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_title: String,
    /// Absolute URL prefix for feed links, without a trailing slash.
    pub base_url: String,
    pub page_size: usize,
    pub search_limit: usize,
    pub feed_limit: usize,
    pub stylesheet: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Notes".to_string(),
            base_url: "http://127.0.0.1:8000".to_string(),
            page_size: 8,
            search_limit: 16,
            feed_limit: 16,
            stylesheet: THEME_DEFAULT.to_string(),
        }
    }
}

/// Everything a handler can reach.
pub struct AppState {
    pub store: CachedStore,
    pub templates: Templates,
    pub settings: SiteSettings,
    /// Hex SHA-256 of the password. `None` disables logging in.
    pub password_hash: Option<String>,
}

impl AppState {
    pub fn new(
        store: CachedStore,
        settings: SiteSettings,
        password_hash: Option<String>,
    ) -> Result<Self> {
        let templates = Templates::new().context("failed to compile page templates")?;
        let settings = SiteSettings {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            ..settings
        };
        let password_hash = password_hash
            .map(|h| h.trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty());
        Ok(Self {
            store,
            templates,
            settings,
            password_hash,
        })
    }

    /// Renders a template with the context every page shares merged in.
    pub fn render<S: Serialize>(
        &self,
        name: &str,
        session: &Session,
        page: S,
    ) -> Result<String, WebError> {
        let ctx = context! {
            auth => session.authenticated,
            path => &session.path,
            year => Utc::now().year(),
            site_title => &self.settings.site_title,
            base_url => &self.settings.base_url,
            ..minijinja::Value::from_serialize(page)
        };
        Ok(self.templates.render(name, ctx)?)
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/note/{id}", get(handlers::show_note))
        .route("/search", get(handlers::search))
        .route("/rss", get(handlers::rss))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/edit", get(handlers::edit_form).post(handlers::edit))
        .route("/delete/{id}", post(handlers::delete))
        .route("/static/style.css", get(handlers::stylesheet))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application on `bind` until Ctrl-C.
pub async fn serve(state: Arc<AppState>, bind: &str) -> Result<()> {
    if state.password_hash.is_none() {
        tracing::warn!("no password hash configured; editing is disabled");
    }

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr()?;
    tracing::info!(
        addr = %addr,
        data = %state.store.store().path().display(),
        notes = state.store.snapshot().len(),
        "listening on http://{addr}"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("server error")
}
