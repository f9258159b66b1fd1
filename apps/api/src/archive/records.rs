//! Append-only archive of assessments and chat transcripts.
//! Each record is a Postgres row plus a markdown copy in S3.

use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::archive::render::{render_assessment_to_md, render_transcript_to_md};
use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;
use crate::llm_client::ChatTurn;
use crate::models::assessment::AssessmentRecordRow;
use crate::models::chat::ChatLogRow;
use crate::recommendation::models::Recommendation;

pub struct ArchivedRecord {
    pub id: Uuid,
    pub s3_key: String,
}

pub fn assessment_key(user_id: Uuid, id: Uuid) -> String {
    format!("assessments/{user_id}/{id}.md")
}

pub fn transcript_key(user_id: Uuid, id: Uuid) -> String {
    format!("transcripts/{user_id}/{id}.md")
}

async fn upload_markdown(
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    key: &str,
    content: String,
) -> Result<()> {
    s3.put_object()
        .bucket(s3_bucket)
        .key(key)
        .body(ByteStream::from(content.into_bytes()))
        .content_type("text/markdown")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("Uploaded markdown to s3://{}/{}", s3_bucket, key);
    Ok(())
}

/// Archives a completed assessment.
pub async fn save_assessment(
    pool: &PgPool,
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    user_id: Uuid,
    tier: Tier,
    answers: &[NormalizedAnswer],
    recommendation: &Recommendation,
) -> Result<ArchivedRecord> {
    let id = Uuid::new_v4();
    let s3_key = assessment_key(user_id, id);

    let md = render_assessment_to_md(user_id, tier, answers, recommendation);
    upload_markdown(s3, s3_bucket, &s3_key, md).await?;

    sqlx::query(
        r#"
        INSERT INTO career_assessments
            (id, user_id, assessment_type, answers, result, s3_key)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(tier.as_str())
    .bind(serde_json::to_value(answers)?)
    .bind(serde_json::to_value(recommendation)?)
    .bind(&s3_key)
    .execute(pool)
    .await?;

    info!("Archived {} assessment {id} for user {user_id}", tier.as_str());
    Ok(ArchivedRecord { id, s3_key })
}

/// Saved assessments for a user, newest first.
pub async fn list_assessments(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<AssessmentRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentRecordRow>(
        "SELECT * FROM career_assessments WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Archives a chat transcript.
pub async fn save_transcript(
    pool: &PgPool,
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    user_id: Uuid,
    messages: &[ChatTurn],
) -> Result<ArchivedRecord> {
    let id = Uuid::new_v4();
    let s3_key = transcript_key(user_id, id);

    let md = render_transcript_to_md(user_id, messages);
    upload_markdown(s3, s3_bucket, &s3_key, md).await?;

    sqlx::query("INSERT INTO chat_logs (id, user_id, messages, s3_key) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(user_id)
        .bind(serde_json::to_value(messages)?)
        .bind(&s3_key)
        .execute(pool)
        .await?;

    info!(
        "Archived transcript {id} ({} messages) for user {user_id}",
        messages.len()
    );
    Ok(ArchivedRecord { id, s3_key })
}

/// Saved transcripts for a user, newest first.
pub async fn list_transcripts(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ChatLogRow>, sqlx::Error> {
    sqlx::query_as::<_, ChatLogRow>(
        "SELECT * FROM chat_logs WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Deletes a transcript owned by `user_id`. Returns whether a row was removed.
pub async fn delete_transcript(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM chat_logs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
