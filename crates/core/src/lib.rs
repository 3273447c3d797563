//! chatbridge_core - Core library for the Ollama gateway
//!
//! This crate provides:
//! - Gateway configuration
//! - Chat message-sequence and prompt construction
//! - The HTTP client for the Ollama daemon

pub mod config;
pub mod ollama;
pub mod prompt;

pub use config::Config;
pub use ollama::{OllamaClient, OllamaError};
pub use prompt::ChatMessage;
