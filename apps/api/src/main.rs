mod archive;
mod assessment;
mod careers;
mod chat;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::questions::QuestionBank;
use crate::assessment::service::SessionService;
use crate::assessment::store::RedisSessionStore;
use crate::chat::relay::ChatRelay;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::recommendation::generator::RecommendationService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis-backed session store
    let redis = redis::Client::open(config.redis_url.clone())?;
    let store = Arc::new(RedisSessionStore::new(redis, config.session_ttl_secs));
    info!(
        "Redis session store initialized (ttl: {}s)",
        config.session_ttl_secs
    );

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Initialize LLM client
    let llm: Arc<dyn TextGenerator> = Arc::new(LlmClient::new(
        config.anthropic_api_key.clone(),
        config.llm_max_attempts,
    )?);
    if config.anthropic_api_key.is_some() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        info!("ANTHROPIC_API_KEY not set; using offline guidance only");
    }

    let recommender = Arc::new(RecommendationService::new(
        llm.clone(),
        config.generation_timeout,
    ));
    let relay = Arc::new(
        ChatRelay::new(llm, config.chat_context_window).with_timeout(config.chat_timeout),
    );
    let sessions = SessionService::new(store, recommender.clone(), QuestionBank::standard());

    let state = AppState {
        db,
        s3,
        config: config.clone(),
        sessions,
        recommender,
        relay,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "compass-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
