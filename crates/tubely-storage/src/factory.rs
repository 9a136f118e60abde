#[cfg(feature = "storage-local")]
use crate::LocalThumbnailStore;
use crate::{MemoryThumbnailStore, StorageError, StorageResult, ThumbnailBackend, ThumbnailStore};
use std::sync::Arc;
use tubely_core::Config;

/// Create a thumbnail store based on configuration
pub async fn create_thumbnail_store(config: &Config) -> StorageResult<Arc<dyn ThumbnailStore>> {
    match config.thumbnail_backend() {
        ThumbnailBackend::Memory => {
            tracing::warn!("Using in-memory thumbnail store; thumbnails are lost on restart");
            Ok(Arc::new(MemoryThumbnailStore::new()))
        }

        #[cfg(feature = "storage-local")]
        ThumbnailBackend::Local => {
            let base_path = config.thumbnail_store_path().ok_or_else(|| {
                StorageError::ConfigError("THUMBNAIL_STORE_PATH not configured".to_string())
            })?;

            let store = LocalThumbnailStore::new(base_path).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-local"))]
        ThumbnailBackend::Local => Err(StorageError::ConfigError(
            "Local thumbnail store not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
