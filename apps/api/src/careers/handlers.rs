use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::careers::catalog::{careers_in, find_career, CareerCategory, CareerPath};
use crate::chat::handoff::career_prompt;
use crate::chat::relay::ChatReply;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerQuery {
    pub category: Option<CareerCategory>,
}

#[derive(Debug, Serialize)]
pub struct DiscussCareerResponse {
    pub prompt: String,
    pub reply: ChatReply,
}

fn lookup(id: u32) -> Result<&'static CareerPath, AppError> {
    find_career(id).ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

/// GET /api/v1/careers?category=
pub async fn handle_list_careers(
    Query(params): Query<CareerQuery>,
) -> Json<Vec<&'static CareerPath>> {
    Json(careers_in(params.category))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    Path(id): Path<u32>,
) -> Result<Json<&'static CareerPath>, AppError> {
    Ok(Json(lookup(id)?))
}

/// POST /api/v1/careers/:id/discuss
pub async fn handle_discuss_career(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DiscussCareerResponse>, AppError> {
    let prompt = career_prompt(lookup(id)?);
    let reply = state.relay.reply(&prompt, &[]).await;
    Ok(Json(DiscussCareerResponse { prompt, reply }))
}
