use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub messages: Value,
    pub s3_key: String,
    pub created_at: DateTime<Utc>,
}
