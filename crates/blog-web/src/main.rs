//! Binary entry point.
//!
//! ```bash
//! cargo run -p blog-web
//! ```
//!
//! Needs `DATABASE_URL` and `REDIS_URL`; everything else has defaults.
//! A `.env` file is picked up when present.

use anyhow::Context;
use blog_common::{try_init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // The subscriber must be up before config parsing logs anything, so
    // only APP_ENV is peeked at this point.
    let env: Environment = std::env::var("APP_ENV")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    let tracing_config = match env {
        Environment::Production => TracingConfig::production(),
        Environment::Development => TracingConfig::development(),
        Environment::Staging => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing(tracing_config) {
        eprintln!("tracing setup failed, continuing without logs: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("assembling configuration from the environment")?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Starting blog server"
    );

    blog_web::run(config).await
}
