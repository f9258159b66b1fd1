use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::assessment::service::SessionService;
use crate::chat::relay::ChatRelay;
use crate::config::Config;
use crate::recommendation::generator::RecommendationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Archive of saved assessments and transcripts.
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// Assessment sessions, backed by Redis in production.
    pub sessions: SessionService,
    pub recommender: Arc<RecommendationService>,
    pub relay: Arc<ChatRelay>,
}
