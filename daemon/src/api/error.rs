//! Handler-boundary error type.
//!
//! Every failure becomes a `{"error": msg}` JSON body here; nothing
//! propagates past a handler, and no failure affects later requests.
//! Error text keeps the lowercase substrings ("json", "ollama", "server",
//! field names) that existing frontends match on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use chatbridge_core::OllamaError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body must be valid json")]
    MalformedBody,

    #[error("missing '{0}' field")]
    MissingField(&'static str),

    #[error("'messages' must be a list")]
    MessagesNotAList,

    /// Ollama reported the failure itself.
    #[error("ollama error: {0}")]
    Upstream(String),

    /// Ollama answered, but the reply shape was unexpected.
    #[error("ollama reply malformed: {0}")]
    MalformedReply(String),

    /// Transport failures and anything else.
    #[error("server error: {0}")]
    Internal(String),
}

impl From<OllamaError> for ApiError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Api { message, .. } => ApiError::Upstream(message),
            OllamaError::MalformedReply(field) => {
                ApiError::MalformedReply(format!("missing {field}"))
            }
            OllamaError::Transport(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedBody
            | ApiError::MissingField(_)
            | ApiError::MessagesNotAList => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::MalformedReply(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match &self {
            ApiError::Upstream(msg) => tracing::error!("ollama reported failure: {msg}"),
            ApiError::MalformedReply(msg) => tracing::error!("unexpected ollama reply: {msg}"),
            ApiError::Internal(msg) => tracing::error!("request failed: {msg}"),
            _ => tracing::debug!("rejected request: {self}"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
