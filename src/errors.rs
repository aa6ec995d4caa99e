use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error kinds produced by the summarization gateway.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The request failed local validation. Non-retryable, surfaced as 400.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested sample document does not exist. Surfaced as 404.
    #[error("{0}")]
    NotFound(String),

    /// The generation backend call failed (auth, timeout, malformed
    /// response). Normally consumed by the fallback path before it reaches
    /// the HTTP layer.
    #[error("Failed to access OpenAI API: {0}")]
    Backend(String),

    /// An outbound HTTP request could not be sent.
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    /// Anything else. Surfaced as 500 with a generic message.
    #[error("Internal server error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizeError {
    fn from(error: anyhow::Error) -> Self {
        SummarizeError::Unexpected(error.to_string())
    }
}

impl SummarizeError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
            Self::Http(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
