//! Errors returned by request handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::infra::StoreError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Store(_) | WebError::Template(_) | WebError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        // The message is fixed per status so nothing from the request is echoed.
        let message = match status {
            StatusCode::NOT_FOUND => "Note not found.",
            StatusCode::BAD_REQUEST => "That request could not be understood.",
            _ => "Something went wrong on our side.",
        };
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
             <title>{code}</title><link rel=\"stylesheet\" href=\"/static/style.css\"></head>\n\
             <body><h1>{code}</h1><p>{message}</p>\
             <p><a href=\"/\">&larr; Home</a></p></body>\n</html>",
            code = status,
        );
        (status, Html(body)).into_response()
    }
}
