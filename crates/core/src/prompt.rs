//! Chat message-sequence and prompt construction.
//!
//! Everything in here is pure: the daemon parses request JSON, these
//! functions turn it into the ordered message list Ollama expects.

use serde::{Deserialize, Serialize};

/// A single role-tagged turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Build the message sequence for a chat completion: the conversation
/// history in its original order, then the new prompt as a final
/// user-role message. The prompt's role is always "user"; callers cannot
/// override it.
pub fn build_messages(context: Vec<ChatMessage>, prompt: &str) -> Vec<ChatMessage> {
    let mut messages = context;
    messages.push(ChatMessage::user(prompt));
    messages
}

/// Render a conversation as plain text for summarization, one
/// `Role: content` paragraph per message.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    let mut transcript = String::new();
    for message in messages {
        transcript.push_str(&capitalize(&message.role));
        transcript.push_str(": ");
        transcript.push_str(&message.content);
        transcript.push_str("\n\n");
    }
    transcript
}

/// Wrap a transcript in the summarization instruction sent to the
/// compaction model.
pub fn summarization_prompt(transcript: &str) -> String {
    format!(
        "Please provide a concise summary of the following conversation. \n\
         Focus on the key points, questions asked, and answers provided.\n\n\
         Conversation:\n{transcript}\n\nSummary:"
    )
}

fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
