//! Axum route handlers for the Advisory API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::advisor::engine::AdvisoryResponse;
use crate::errors::AppError;
use crate::state::AppState;

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Pass-through only; defaults to "en" and never branches logic.
    #[serde(default = "default_language")]
    pub language: String,
}

/// POST /api/v1/chat
///
/// Classifies the message and returns the advisory response. Malformed or
/// missing bodies surface as 400s through the shared error envelope.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<AdvisoryResponse>, AppError> {
    let Json(request) = payload?;
    debug!(language = %request.language, "chat request received");
    Ok(Json(state.engine.advise(&request.message, &request.language)))
}

/// POST /api/v1/counsellor/chat
///
/// Compatibility-named endpoint kept for older clients; forwards to the
/// primary chat handler unchanged.
pub async fn handle_counsellor_chat(
    state: State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<AdvisoryResponse>, AppError> {
    handle_chat(state, payload).await
}
