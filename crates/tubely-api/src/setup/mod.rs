//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded `Config` to a ready `Router`.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.is_production())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let pool = database::setup_database(&config).await?;
    let thumbnails = storage::setup_thumbnail_store(&config).await?;

    let state = AppState::new(
        config.clone(),
        Arc::new(VideoRepository::new(pool)),
        thumbnails,
    );

    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
