use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use chatbridge_core::prompt::{
    build_messages, format_transcript, summarization_prompt, ChatMessage,
};

use crate::api::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct GenerateResponse {
    pub response: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct CompactResponse {
    pub summary: String,
    pub model: String,
}

/// POST /api/v1/response
///
/// Body: `{"prompt", "model", "context"?: [{"role"?, "content"?}, ...]}`.
/// The context messages are forwarded in order, with the prompt appended
/// as a final user message.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let data = parse_body(body)?;
    let prompt = require_str(&data, "prompt")?;
    let model = require_str(&data, "model")?;
    let context = context_messages(&data);

    let messages = build_messages(context, prompt);
    let response = state.ollama.chat(model, &messages).await?;

    Ok(Json(GenerateResponse {
        response,
        model: model.to_string(),
    }))
}

/// POST /api/v1/compact
///
/// Body: `{"messages": [{"role"?, "content"?}, ...]}`. Formats the whole
/// conversation into a single summarization prompt and sends it to the
/// configured compaction model.
pub async fn compact(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CompactResponse>, ApiError> {
    let data = parse_body(body)?;
    let items = match data.get("messages") {
        None | Some(Value::Null) => return Err(ApiError::MissingField("messages")),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ApiError::MessagesNotAList),
    };
    if items.is_empty() {
        return Err(ApiError::MissingField("messages"));
    }

    let history: Vec<ChatMessage> = items
        .iter()
        .map(|item| message_from_value(item, "unknown"))
        .collect();
    let prompt = summarization_prompt(&format_transcript(&history));

    let model = state.config.ollama.compact_model.clone();
    let summary = state
        .ollama
        .chat(&model, &[ChatMessage::user(prompt)])
        .await?;

    Ok(Json(CompactResponse { summary, model }))
}

/// Accept any JSON object with at least one key; everything else (parse
/// failure, wrong content type, `null`, `{}`, non-objects) is a malformed
/// body.
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(data) = body.map_err(|_| ApiError::MalformedBody)?;
    match data.as_object() {
        Some(map) if !map.is_empty() => Ok(data),
        _ => Err(ApiError::MalformedBody),
    }
}

/// A required field must be present, a string, and non-empty.
fn require_str<'a>(data: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingField(field))
}

/// A `context` that is absent or not an array is silently treated as
/// empty. Deliberately permissive, kept for frontend compatibility.
fn context_messages(data: &Value) -> Vec<ChatMessage> {
    data.get("context")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| message_from_value(item, "user"))
                .collect()
        })
        .unwrap_or_default()
}

/// Per-field defaults; a context message is never rejected outright.
fn message_from_value(value: &Value, default_role: &str) -> ChatMessage {
    ChatMessage {
        role: value
            .get("role")
            .and_then(Value::as_str)
            .unwrap_or(default_role)
            .to_string(),
        content: value
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
