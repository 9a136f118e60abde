//! Thumbnail store setup

use anyhow::Result;
use std::sync::Arc;
use tubely_core::Config;
use tubely_storage::{create_thumbnail_store, ThumbnailStore};

pub async fn setup_thumbnail_store(config: &Config) -> Result<Arc<dyn ThumbnailStore>> {
    tracing::info!("Initializing thumbnail store...");
    let store = create_thumbnail_store(config).await?;
    tracing::info!(
        backend = %store.backend_type(),
        path = ?config.thumbnail_store_path(),
        "Thumbnail store initialized"
    );
    Ok(store)
}
