//! In-memory `VideoStore` for tests that should not need Postgres.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tubely_core::models::{CreateVideoParams, Video};
use tubely_core::AppError;
use uuid::Uuid;

use crate::store::VideoStore;

#[derive(Clone, Default)]
pub struct InMemoryVideoStore {
    videos: Arc<RwLock<HashMap<Uuid, Video>>>,
    fail_updates: Arc<AtomicBool>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record as-is, replacing any record with the same id.
    pub async fn insert(&self, video: Video) {
        self.videos.write().await.insert(video.id, video);
    }

    /// Make every subsequent `update_video` call fail, to exercise persistence errors.
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create_video(&self, params: CreateVideoParams) -> Result<Video, AppError> {
        let video = Video::new(params, Utc::now());
        self.videos.write().await.insert(video.id, video.clone());
        Ok(video)
    }

    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.read().await.get(&id).cloned())
    }

    async fn update_video(&self, video: &Video) -> Result<(), AppError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::Internal("update rejected by test store".to_string()));
        }
        let mut videos = self.videos.write().await;
        match videos.get_mut(&video.id) {
            Some(existing) => {
                *existing = video.clone();
                Ok(())
            }
            None => Err(AppError::VideoNotFound(video.id)),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
