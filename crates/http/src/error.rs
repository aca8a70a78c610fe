//! Error handling for the bookfront HTTP layer

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// Rendered HTML body shared by all HTTP error responses
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    status: u16,
    reason: &'static str,
    message: String,
    trace_id: String,
    timestamp: String,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum PageError {
    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PageError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let trace_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc().to_string();

        let (status, message) = match self {
            PageError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            PageError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            PageError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!(
            trace_id = %trace_id,
            status_code = %status.as_u16(),
            %message,
            "request error"
        );

        // In production, we hide internal error details from clients
        let message = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            "An internal server error occurred".to_string()
        } else {
            message
        };

        let page = ErrorPage {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message,
            trace_id: trace_id.to_string(),
            timestamp,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(error) => {
                // The error page itself failed to render; fall back to plain text.
                tracing::error!(%error, "error page render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
