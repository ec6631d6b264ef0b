// src/main.rs

use std::str::FromStr;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use blueprint_backend::config::Config;
use blueprint_backend::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading config
    if dotenvy::dotenv().is_err() {
        eprintln!("Warning: .env file not found. Using environment variables and defaults.");
    }

    // Missing or malformed configuration aborts here, before the server
    // ever accepts a request.
    let config = Config::from_env().context("configuration error")?;

    let level = Level::from_str(&config.log_level)
        .with_context(|| format!("invalid LOG_LEVEL '{}'", config.log_level))?;
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting blueprint backend");
    info!("Model: {}", config.gemini_model);
    info!("Upstream timeout: {}s", config.gemini_timeout_secs);

    server::run(config).await
}
