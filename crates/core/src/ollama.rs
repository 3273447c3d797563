//! Ollama HTTP API client: chat completion and model listing.
//!
//! One network call per invocation; no retries. Timeouts are whatever
//! reqwest defaults to, since inference can legitimately take many
//! seconds.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::ChatMessage;

#[derive(Debug, Error)]
pub enum OllamaError {
    /// Ollama itself reported a failure (unknown model, load failure, ...).
    #[error("ollama returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// The reply parsed but lacked an expected field.
    #[error("reply missing {0}")]
    MalformedReply(&'static str),

    /// The request never completed (daemon down, connection reset, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatReply {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct TagsReply {
    models: Option<Vec<TagModel>>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}

pub struct OllamaClient {
    base: String,
    client: Client,
}

impl OllamaClient {
    pub fn new(base: String) -> Self {
        let client = Client::builder().build().unwrap_or_default();
        Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Run one non-streaming chat completion and return the reply content.
    pub async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, OllamaError> {
        let url = format!("{}/api/chat", self.base);
        tracing::debug!(model, count = messages.len(), "querying ollama chat");

        let res = self
            .client
            .post(&url)
            .json(&ChatPayload {
                model,
                messages,
                stream: false,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let message = res.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status, message });
        }

        let reply: ChatReply = res.json().await?;
        reply
            .message
            .and_then(|m| m.content)
            .ok_or(OllamaError::MalformedReply("message content"))
    }

    /// List the models Ollama has locally, in the order Ollama reports
    /// them. A reply without a `models` key is treated as an empty list.
    pub async fn list_models(&self) -> Result<Vec<String>, OllamaError> {
        let url = format!("{}/api/tags", self.base);
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let message = res.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status, message });
        }

        let reply: TagsReply = res.json().await?;
        Ok(reply
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.name)
            .collect())
    }
}
