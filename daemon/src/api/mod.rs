pub mod chat;
pub mod error;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::state::AppState;
use std::sync::Arc;

pub fn routes(state: Arc<AppState>) -> Router {
    let index = ServeFile::new(state.config.static_dir.join("index.html"));

    Router::new()
        .route_service("/", index)
        .route("/health", get(health))
        .route("/api/v1/response", post(chat::generate))
        .route("/api/v1/compact", post(chat::compact))
        .route("/api/v1/models", get(models::list_models))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
