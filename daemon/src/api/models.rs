use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub count: usize,
}

/// GET /api/v1/models
///
/// Model names in the order Ollama reports them.
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let models = state.ollama.list_models().await?;
    let count = models.len();
    Ok(Json(ModelsResponse { models, count }))
}
