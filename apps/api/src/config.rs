use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Unset means every remote call fails fast and the local fallbacks answer.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub generation_timeout: Duration,
    pub llm_max_attempts: u32,
    pub session_ttl_secs: u64,
    pub chat_context_window: usize,
    /// Bound on each chat relay attempt.
    pub chat_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_timeout: Duration::from_secs(parse_env("GENERATION_TIMEOUT_SECS", 10)?),
            llm_max_attempts: parse_env::<u32>("LLM_MAX_ATTEMPTS", 2)?.max(1),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 86_400)?,
            chat_context_window: parse_env::<usize>("CHAT_CONTEXT_WINDOW", 6)?.clamp(4, 6),
            chat_timeout: Duration::from_secs(parse_env("CHAT_TIMEOUT_SECS", 20)?),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
