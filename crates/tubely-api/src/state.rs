//! Application state shared by every handler.

use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoStore;
use tubely_storage::ThumbnailStore;

/// Handlers reach the stores only through these trait objects; the concrete backends
/// are chosen once in `setup`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    pub thumbnails: Arc<dyn ThumbnailStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoStore>,
        thumbnails: Arc<dyn ThumbnailStore>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            videos,
            thumbnails,
        })
    }
}
