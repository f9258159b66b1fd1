use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One archived assessment: normalized answers plus the result shown.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_type: String,
    pub answers: Value,
    pub result: Value,
    pub s3_key: String,
    pub created_at: DateTime<Utc>,
}
