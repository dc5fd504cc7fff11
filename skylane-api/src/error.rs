use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use skylane_core::error::{SearchError, TransformError, ValidationError};

/// HTTP-facing error. Every response body is `{ "error": message }`.
#[derive(Debug)]
pub enum ApiError {
    /// User-correctable input problem; the message is surfaced verbatim.
    Validation(String),
    /// Upstream search failure. The message is shown to the client so a
    /// provider-side rejection reads as something actionable.
    Search(SearchError),
    Anyhow(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Search(err) => {
                tracing::error!("Flight search error: {}", err);
                // Credential problems never leak detail to the client.
                let message = match &err {
                    SearchError::Auth(_) => "Failed to get access token".to_string(),
                    other => other.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.0)
    }
}

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        Self::Search(err.into())
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation(v) => Self::Validation(v.0),
            other => Self::Search(other),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
