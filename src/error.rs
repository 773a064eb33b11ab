use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Transport-facing error taxonomy. Every handler returns this and the
/// mapping to status codes and `{"errors": ...}` bodies lives here alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input; carries every violated field message at once.
    #[error("invalid input")]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    /// Duplicate account.
    #[error("{0}")]
    Conflict(String),
    /// Bad credentials or invalid/expired token. The message is deliberately
    /// identical across root causes.
    #[error("{0}")]
    Auth(String),
    /// Unexpected failure in the store, hashing, or signing layer. Logged
    /// server-side; the client sees only a generic message.
    #[error("error in {op}")]
    Internal {
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(op: &'static str, err: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            op,
            source: err.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": messages }))
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "errors": message })),
            ApiError::Conflict(message) => (StatusCode::BAD_REQUEST, json!({ "errors": message })),
            ApiError::Auth(message) => (StatusCode::FORBIDDEN, json!({ "errors": message })),
            ApiError::Internal { op, source } => {
                error!(error = %source, op, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "errors": format!("Error in {}", op) }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
