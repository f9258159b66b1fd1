//! Axum route handlers for the counsellor chat.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::chat::relay::ChatReply;
use crate::errors::AppError;
use crate::llm_client::ChatTurn;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub context: Vec<ChatTurn>,
}

/// POST /api/v1/chat
///
/// Never fails once the prompt is accepted: relay errors degrade to a canned reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let reply = state.relay.reply(&request.prompt, &request.context).await;
    Ok(Json(reply))
}
