//! Application configuration.
//!
//! Everything comes from environment variables, with a `.env` file picked
//! up when present. Only `DATABASE_URL` and `REDIS_URL` are required.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Fallback values for everything the environment leaves unset.
mod defaults {
    pub const APP_NAME: &str = "blog-server";
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 4131;
    pub const DB_MAX_CONNECTIONS: u32 = 20;
    pub const DB_MIN_CONNECTIONS: u32 = 5;
    pub const REDIS_MAX_CONNECTIONS: u32 = 10;
    /// One day
    pub const SESSION_TTL_SECONDS: u64 = 86400;

    pub fn app_name() -> String {
        APP_NAME.to_string()
    }

    pub fn host() -> String {
        HOST.to_string()
    }

    pub fn port() -> u16 {
        PORT
    }

    pub fn db_max_connections() -> u32 {
        DB_MAX_CONNECTIONS
    }

    pub fn db_min_connections() -> u32 {
        DB_MIN_CONNECTIONS
    }

    pub fn redis_max_connections() -> u32 {
        REDIS_MAX_CONNECTIONS
    }

    pub fn session_ttl() -> u64 {
        SESSION_TTL_SECONDS
    }
}

/// Everything the binary needs to come up, grouped by concern
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub session: SessionConfig,
    pub snowflake: SnowflakeConfig,
}

/// Name and environment of this deployment
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "defaults::app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Deployment flavor, steering log formats and verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` string the listener binds to
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "defaults::db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "defaults::db_min_connections")]
    pub min_connections: u32,
}

/// Connection settings for the session store
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "defaults::redis_max_connections")]
    pub max_connections: u32,
}

/// Session lifetime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::session_ttl")]
    pub ttl_seconds: u64,
}

/// Snowflake generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Read and parse an optional environment variable, falling back on
/// absence or parse failure.
fn var_or<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}

fn required_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Assemble the full configuration from the process environment.
    ///
    /// # Errors
    /// Fails when `DATABASE_URL` or `REDIS_URL` is unset; everything
    /// else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the real environment still applies
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| defaults::app_name()),
                env: var_or("APP_ENV", Environment::default()),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| defaults::host()),
                port: var_or("SERVER_PORT", defaults::PORT),
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: var_or("DATABASE_MAX_CONNECTIONS", defaults::DB_MAX_CONNECTIONS),
                min_connections: var_or("DATABASE_MIN_CONNECTIONS", defaults::DB_MIN_CONNECTIONS),
            },
            redis: RedisConfig {
                url: required_var("REDIS_URL")?,
                max_connections: var_or("REDIS_MAX_CONNECTIONS", defaults::REDIS_MAX_CONNECTIONS),
            },
            session: SessionConfig {
                ttl_seconds: var_or("SESSION_TTL_SECONDS", defaults::SESSION_TTL_SECONDS),
            },
            snowflake: SnowflakeConfig {
                worker_id: var_or("WORKER_ID", 0),
            },
        })
    }
}

/// Why configuration loading failed.
///
/// Only outright absence of a required variable is fatal; a present but
/// unparseable optional value falls back to its default instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
