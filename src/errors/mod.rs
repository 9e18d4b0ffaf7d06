use std::io;
use axum::{http::{header, StatusCode}, response::{IntoResponse, Response}};

/// Custom error types for the wiki application
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("{0}")]
    Io(#[from] io::Error),
    /// Request path did not match any page route
    #[error("404 page not found")]
    NotFound,
    /// No page stored under this title, or its file could not be read
    #[error("page {title} not found: {source}")]
    PageNotFound {
        title: String,
        #[source]
        source: io::Error,
    },
    /// Route is valid but does not accept the request method
    #[error("405 method not allowed")]
    MethodNotAllowed,
    /// Submitted form could not be read
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Template(String),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        let status = match self {
            WikiError::NotFound | WikiError::PageNotFound { .. } => StatusCode::NOT_FOUND,
            WikiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            WikiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WikiError::Io(_)
            | WikiError::Template(_)
            | WikiError::Pattern(_)
            | WikiError::Logger(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self),
        )
            .into_response()
    }
}
