//! chatbridge_daemon - HTTP gateway in front of a local Ollama daemon
//!
//! This crate provides the gateway server that:
//! - Serves the static chat frontend
//! - Validates API requests and builds ordered message sequences
//! - Forwards chat and model-listing calls to Ollama

pub mod api;
pub mod server;
pub mod state;

pub use server::run_server;
