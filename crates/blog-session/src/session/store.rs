//! Login session storage in Redis.
//!
//! Stores sessions with automatic expiration. Session IDs are random UUIDs,
//! so possession of the cookie is the only way to reach a session.

use crate::pool::{RedisPool, RedisResult};
use blog_core::Snowflake;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key prefix for login sessions
const SESSION_PREFIX: &str = "session:";

/// Default TTL for login sessions (24 hours)
const DEFAULT_SESSION_TTL: u64 = 24 * 60 * 60;

/// Stored session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// User ID this session belongs to
    pub user_id: Snowflake,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    /// Create new session data for a user
    #[must_use]
    pub fn new(user_id: Snowflake) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store for managing logged-in users
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session
    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    /// Create a session for a user and return its ID
    pub async fn create(&self, user_id: Snowflake) -> RedisResult<String> {
        let session_id = Uuid::new_v4().to_string();
        let data = SessionData::new(user_id);

        let key = Self::key(&session_id);
        self.pool.set_ex(&key, &data, self.ttl_seconds).await?;

        tracing::debug!(
            session_id = %session_id,
            user_id = %user_id,
            "Created session"
        );

        Ok(session_id)
    }

    /// Get session data (returns None if expired or unknown)
    pub async fn get(&self, session_id: &str) -> RedisResult<Option<SessionData>> {
        let key = Self::key(session_id);
        self.pool.get_value(&key).await
    }

    /// Destroy a session (logout)
    pub async fn destroy(&self, session_id: &str) -> RedisResult<bool> {
        let key = Self::key(session_id);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!(session_id = %session_id, "Destroyed session");
        }

        Ok(deleted)
    }

    /// Check that the backing Redis is reachable
    pub async fn health_check(&self) -> RedisResult<()> {
        self.pool.health_check().await
    }
}
