use crate::traits::{StorageResult, ThumbnailStore};
use crate::ThumbnailBackend;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tubely_core::models::Thumbnail;
use uuid::Uuid;

/// In-memory thumbnail store. Entries live as long as the process.
#[derive(Default)]
pub struct MemoryThumbnailStore {
    entries: RwLock<HashMap<Uuid, Thumbnail>>,
}

impl MemoryThumbnailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ThumbnailStore for MemoryThumbnailStore {
    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> StorageResult<()> {
        let size = thumbnail.len();
        let replaced = self
            .entries
            .write()
            .await
            .insert(video_id, thumbnail)
            .is_some();

        tracing::debug!(
            video_id = %video_id,
            size_bytes = size,
            replaced,
            "Thumbnail stored in memory"
        );
        Ok(())
    }

    async fn get(&self, video_id: Uuid) -> StorageResult<Option<Thumbnail>> {
        Ok(self.entries.read().await.get(&video_id).cloned())
    }

    fn backend_type(&self) -> ThumbnailBackend {
        ThumbnailBackend::Memory
    }
}
