//! Axum route handlers for stateless result generation.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::recommendation::models::{GenerationRequest, Recommendation, RecommendationSource};
use crate::state::AppState;

/// The tier's bundle fields at the top level, plus where they came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResultResponse {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub source: RecommendationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// POST /api/v1/assessments/generate
///
/// Always answers with a schema-conforming bundle; remote failures degrade to
/// the heuristic path.
pub async fn handle_generate_result(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResultResponse>, AppError> {
    let outcome = state
        .recommender
        .generate(request.assessment_type, &request.answers)
        .await;

    Ok(Json(GenerateResultResponse {
        recommendation: outcome.recommendation,
        source: outcome.source,
        notice: outcome.notice,
    }))
}
