//! Video store abstraction
//!
//! Handlers depend on this trait rather than on a concrete repository so the
//! store can be swapped (Postgres in production, in-memory in tests).

use async_trait::async_trait;
use tubely_core::models::{CreateVideoParams, Video};
use tubely_core::AppError;
use uuid::Uuid;

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a new record owned by `params.user_id`
    async fn create_video(&self, params: CreateVideoParams) -> Result<Video, AppError>;

    /// Fetch a record by id; `Ok(None)` when it does not exist
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Overwrite the mutable columns of an existing record
    ///
    /// Returns `AppError::VideoNotFound` when no row has `video.id`.
    async fn update_video(&self, video: &Video) -> Result<(), AppError>;

    /// Cheap round-trip used by the readiness probe
    async fn ping(&self) -> Result<(), AppError>;
}
