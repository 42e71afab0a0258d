//! Server error types.

use std::io;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use aisweb_content::ContentError;

use crate::render;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO error (listener, file, etc.).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Reading site content failed.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
}

impl ServerError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a bind error.
    pub fn bind(addr: impl Into<String>, source: io::Error) -> Self {
        Self::Bind {
            addr: addr.into(),
            source,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::error_page()),
        )
            .into_response()
    }
}
