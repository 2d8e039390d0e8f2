//! deadpool-redis wrapper.
//!
//! Connections are handed out per operation; values are stored as JSON
//! strings so the session record stays readable from `redis-cli`.

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};

/// Pool settings
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Connection URL, e.g. `redis://localhost:6379`
    pub url: String,
    /// Pool capacity
    pub max_connections: usize,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
        }
    }
}

impl From<&blog_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &blog_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
        }
    }
}

/// Failures from pool setup or a Redis round trip
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Redis pool setup failed: {0}")]
    CreatePool(String),

    #[error("Redis connection unavailable: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored value was not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Cloneable handle over the shared connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RedisPool(status = {:?})", self.pool.status())
    }
}

impl RedisPool {
    /// Build a pool. Connections are established lazily, so this does not
    /// prove the server is reachable; `health_check` does.
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let build_err = |e: &dyn std::fmt::Display| RedisPoolError::CreatePool(e.to_string());

        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| build_err(&e))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| build_err(&e))?;

        // Keep any user:password prefix out of the logs
        let display_url = config.url.rsplit('@').next().unwrap_or(&config.url);
        tracing::info!(
            url = %display_url,
            capacity = config.max_connections,
            "Redis pool ready"
        );

        Ok(Self { pool })
    }

    /// Build a pool from the application Redis config
    pub fn from_config(config: &blog_common::RedisConfig) -> RedisResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    /// Check out a connection
    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// PING the server through a pooled connection
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Store a JSON-encoded value under `key` with an expiry
    pub async fn set_ex<V: Serialize>(&self, key: &str, value: &V, ttl_seconds: u64) -> RedisResult<()> {
        let body = serde_json::to_string(value)?;
        let mut conn = self.get().await?;
        conn.set_ex::<_, _, ()>(key, &body, ttl_seconds).await?;
        Ok(())
    }

    /// Fetch and decode the value under `key`, `None` when absent or expired
    pub async fn get_value<V: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<V>> {
        let mut conn = self.get().await?;
        let body: Option<String> = conn.get(key).await?;

        body.map(|raw| serde_json::from_str(&raw).map_err(RedisPoolError::from))
            .transpose()
    }

    /// Remove `key`, reporting whether it existed
    pub async fn delete(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.get().await?;
        let removed: i32 = conn.del(key).await?;
        Ok(removed > 0)
    }
}
