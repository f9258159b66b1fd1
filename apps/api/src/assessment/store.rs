//! Session Store — persistence port for assessment sessions.

use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::assessment::session::AssessmentSession;

const KEY_PREFIX: &str = "compass:session:";

/// Compare-and-set on the stored session's `version` field.
/// KEYS[1] = session key, ARGV = expected version, new JSON, TTL seconds.
const SAVE_IF_VERSION_SCRIPT: &str = r#"
local current = redis.call('GET', KEYS[1])
if not current then
    return 0
end
local stored = cjson.decode(current)['version'] or 0
if tonumber(stored) ~= tonumber(ARGV[1]) then
    return 0
end
redis.call('SET', KEYS[1], ARGV[2], 'EX', ARGV[3])
return 1
"#;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session {id}: {reason}")]
    DeserializationFailed { id: Uuid, reason: String },

    #[error("Session {0} kept changing underneath the write")]
    Conflict(Uuid),
}

impl From<redis::RedisError> for SessionStoreError {
    fn from(e: redis::RedisError) -> Self {
        SessionStoreError::Unavailable(e.to_string())
    }
}

/// Loads and saves whole sessions. A missing or expired session loads as `None`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<AssessmentSession>, SessionStoreError>;

    /// Writes a new session unconditionally.
    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError>;

    /// Writes `session` only while the stored copy is still at `expected`.
    /// Returns `false` on a version conflict or when the session has expired.
    async fn save_if_version(
        &self,
        session: &AssessmentSession,
        expected: u64,
    ) -> Result<bool, SessionStoreError>;
}

fn to_json(session: &AssessmentSession) -> Result<String, SessionStoreError> {
    serde_json::to_string(session).map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))
}

/// Stores each session as a JSON string with a sliding TTL.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    fn key(id: Uuid) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: Uuid) -> Result<Option<AssessmentSession>, SessionStoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(Self::key(id)).await?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| SessionStoreError::DeserializationFailed {
                id,
                reason: e.to_string(),
            })
        })
        .transpose()
    }

    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError> {
        let json = to_json(session)?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(Self::key(session.id), json, self.ttl_secs)
            .await?;
        Ok(())
    }

    async fn save_if_version(
        &self,
        session: &AssessmentSession,
        expected: u64,
    ) -> Result<bool, SessionStoreError> {
        let json = to_json(session)?;
        let script = redis::Script::new(SAVE_IF_VERSION_SCRIPT);

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let written: i32 = script
            .key(Self::key(session.id))
            .arg(expected)
            .arg(json)
            .arg(self.ttl_secs)
            .invoke_async(&mut conn)
            .await?;
        Ok(written == 1)
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-process store for tests.
    #[derive(Default)]
    pub struct MemorySessionStore {
        sessions: Mutex<HashMap<Uuid, AssessmentSession>>,
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
        async fn load(&self, id: Uuid) -> Result<Option<AssessmentSession>, SessionStoreError> {
            Ok(self.sessions.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError> {
            self.sessions
                .lock()
                .unwrap()
                .insert(session.id, session.clone());
            Ok(())
        }

        async fn save_if_version(
            &self,
            session: &AssessmentSession,
            expected: u64,
        ) -> Result<bool, SessionStoreError> {
            let mut sessions = self.sessions.lock().unwrap();
            if sessions.get(&session.id).map(|s| s.version) != Some(expected) {
                return Ok(false);
            }
            sessions.insert(session.id, session.clone());
            Ok(true)
        }
    }
}
