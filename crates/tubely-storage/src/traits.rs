//! Thumbnail store abstraction trait
//!
//! This module defines the trait every thumbnail backend implements. Handlers hold an
//! `Arc<dyn ThumbnailStore>` from application state instead of a process-wide map.

use crate::ThumbnailBackend;
use async_trait::async_trait;
use thiserror::Error;
use tubely_core::models::Thumbnail;
use tubely_core::AppError;
use uuid::Uuid;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Thumbnail store trait
///
/// One entry per video id. `put` replaces any existing entry; concurrent `put`s for
/// the same id are last-writer-wins.
#[async_trait]
pub trait ThumbnailStore: Send + Sync {
    /// Store or overwrite the thumbnail for `video_id`
    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> StorageResult<()>;

    /// Fetch the thumbnail for `video_id`, `None` if nothing was stored
    async fn get(&self, video_id: Uuid) -> StorageResult<Option<Thumbnail>>;

    /// Get the storage backend type
    fn backend_type(&self) -> ThumbnailBackend;
}
