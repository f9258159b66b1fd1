//! Axum route handlers for the question bank and assessment sessions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::questions::{Question, Tier};
use crate::assessment::service::SessionView;
use crate::assessment::session::SessionEvent;
use crate::chat::handoff::discussion_prompt;
use crate::chat::relay::ChatReply;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub tier: Option<Tier>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<&'static Question>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub tier: Option<Tier>,
}

#[derive(Debug, Serialize)]
pub struct DiscussResponse {
    pub prompt: String,
    pub reply: ChatReply,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions?tier=
///
/// Without `tier`, returns both tiers in id order.
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionsQuery>,
) -> Json<QuestionsResponse> {
    let bank = state.sessions.bank();
    let questions = match params.tier {
        Some(tier) => bank.for_tier(tier),
        None => {
            let mut all = bank.for_tier(Tier::Entry);
            all.extend(bank.for_tier(Tier::Advanced));
            all.sort_by_key(|q| q.id);
            all
        }
    };
    Json(QuestionsResponse { questions })
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<Json<SessionView>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let session = state
        .sessions
        .create(request.tier.unwrap_or(Tier::Entry))
        .await?;
    Ok(Json(state.sessions.view(&session, None)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await?
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(state.sessions.view(&session, None)))
}

/// POST /api/v1/sessions/:id/events
///
/// A rejected event is not an HTTP error: the unchanged session comes back
/// with `rejected` set.
pub async fn handle_session_event(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(event): Json<SessionEvent>,
) -> Result<Json<SessionView>, AppError> {
    let dispatched = state
        .sessions
        .dispatch(session_id, event)
        .await?
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(
        state.sessions.view(&dispatched.session, dispatched.rejected),
    ))
}

/// POST /api/v1/sessions/:id/discuss
///
/// Hands the finished recommendation to the chat relay as the opening prompt.
pub async fn handle_discuss_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DiscussResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await?
        .ok_or_else(|| session_not_found(session_id))?;

    let outcome = session.outcome().ok_or_else(|| {
        AppError::Validation("Results are not ready for this session yet".to_string())
    })?;

    let prompt = discussion_prompt(&outcome.recommendation);
    let reply = state.relay.reply(&prompt, &[]).await;
    Ok(Json(DiscussResponse { prompt, reply }))
}
