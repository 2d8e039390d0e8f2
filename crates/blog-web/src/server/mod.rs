//! Wiring and startup.
//!
//! `run` is the whole lifecycle; `create_app_state` and `create_app` are
//! split out so integration tests can stand up the app on their own port.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use blog_common::AppConfig;
use blog_core::SnowflakeGenerator;
use blog_db::{create_pool, run_migrations, PgPostRepository, PgUserRepository};
use blog_service::ServiceContextBuilder;
use blog_session::{RedisPool, SessionStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Attach routes, middleware and state into the final Router
pub fn create_app(state: AppState) -> Router {
    apply_middleware(create_router()).with_state(state)
}

/// Connect to PostgreSQL and Redis and assemble the service context
pub async fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&blog_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    })
    .await
    .context("Failed to connect to PostgreSQL")?;

    // Schema comes up to date on every start
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("PostgreSQL ready");

    info!("Connecting to Redis...");
    let redis_pool = RedisPool::from_config(&config.redis).context("Failed to connect to Redis")?;
    let session_store = SessionStore::with_ttl(redis_pool, config.session.ttl_seconds);
    info!("Redis ready");

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool)))
        .session_store(session_store)
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
        .build()
        .context("Failed to build service context")?;

    Ok(AppState::new(service_context))
}

/// Serve `app` on `addr` until the process is stopped
pub async fn run_server(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Full startup: wire dependencies, then serve
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
