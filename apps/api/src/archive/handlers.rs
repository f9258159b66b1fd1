use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::archive::records::{
    delete_transcript, list_assessments, list_transcripts, save_assessment, save_transcript,
    ArchivedRecord,
};
use crate::assessment::normalizer::normalize_for_tier;
use crate::errors::AppError;
use crate::llm_client::ChatTurn;
use crate::models::assessment::AssessmentRecordRow;
use crate::models::chat::ChatLogRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTranscriptRequest {
    pub user_id: Uuid,
    pub messages: Vec<ChatTurn>,
}

/// Persistence never fails the caller's flow; failures surface as `saved: false`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Object key of the markdown copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

impl SaveResponse {
    fn from_result(what: &str, result: anyhow::Result<ArchivedRecord>) -> Self {
        match result {
            Ok(record) => Self {
                saved: true,
                id: Some(record.id),
                s3_key: Some(record.s3_key),
            },
            Err(e) => {
                error!("Failed to save {what}: {e:?}");
                Self {
                    saved: false,
                    id: None,
                    s3_key: None,
                }
            }
        }
    }
}

/// POST /api/v1/sessions/:id/save
pub async fn handle_save_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SaveSessionRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let outcome = session.outcome().ok_or_else(|| {
        AppError::Validation("Results are not ready for this session yet".to_string())
    })?;

    let answers = normalize_for_tier(state.sessions.bank(), &session.answers, session.tier);
    let result = save_assessment(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        req.user_id,
        session.tier,
        &answers,
        &outcome.recommendation,
    )
    .await;

    Ok(Json(SaveResponse::from_result("assessment", result)))
}

/// GET /api/v1/assessments?user_id=
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AssessmentRecordRow>>, AppError> {
    let records = list_assessments(&state.db, params.user_id).await?;
    Ok(Json(records))
}

/// POST /api/v1/chat/transcripts
pub async fn handle_save_transcript(
    State(state): State<AppState>,
    Json(req): Json<SaveTranscriptRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    let result = save_transcript(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        req.user_id,
        &req.messages,
    )
    .await;

    Ok(Json(SaveResponse::from_result("transcript", result)))
}

/// GET /api/v1/chat/transcripts?user_id=
pub async fn handle_list_transcripts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ChatLogRow>>, AppError> {
    let transcripts = list_transcripts(&state.db, params.user_id).await?;
    Ok(Json(transcripts))
}

/// DELETE /api/v1/chat/transcripts/:id?user_id=
pub async fn handle_delete_transcript(
    State(state): State<AppState>,
    Path(transcript_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if delete_transcript(&state.db, transcript_id, params.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Transcript {transcript_id} not found"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_record_reports_id_and_key() {
        let id = Uuid::from_u128(7);
        let response = SaveResponse::from_result(
            "transcript",
            Ok(ArchivedRecord {
                id,
                s3_key: "transcripts/u/7.md".to_string(),
            }),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["saved"], true);
        assert_eq!(json["s3Key"], "transcripts/u/7.md");
    }

    #[test]
    fn test_failed_save_reports_saved_false_only() {
        let response =
            SaveResponse::from_result("assessment", Err(anyhow::anyhow!("bucket unreachable")));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "saved": false }));
    }
}
