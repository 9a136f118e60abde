use crate::keys::{data_file_name, media_type_file_name};
use crate::traits::{StorageError, StorageResult, ThumbnailStore};
use crate::ThumbnailBackend;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tubely_core::models::Thumbnail;
use uuid::Uuid;

/// Local filesystem thumbnail store
///
/// Survives restarts. Each thumbnail is two files in `base_path`: the bytes and a
/// sidecar with the media type.
#[derive(Clone)]
pub struct LocalThumbnailStore {
    base_path: PathBuf,
}

impl LocalThumbnailStore {
    /// Create a new LocalThumbnailStore instance
    ///
    /// # Arguments
    /// * `base_path` - Directory for thumbnail files (e.g., "/var/lib/tubely/thumbnails")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create thumbnail directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalThumbnailStore { base_path })
    }

    /// Write `data` next to `path` and rename it into place so readers never see a
    /// partially written file.
    async fn write_atomic(&self, path: &Path, data: &[u8]) -> StorageResult<()> {
        let tmp_path = path.with_extension(format!("tmp-{}", Uuid::new_v4()));

        let mut file = fs::File::create(&tmp_path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", tmp_path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", tmp_path.display(), e))
        })?;

        fs::rename(&tmp_path, path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to move {} into place: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl ThumbnailStore for LocalThumbnailStore {
    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> StorageResult<()> {
        let data_path = self.base_path.join(data_file_name(video_id));
        let type_path = self.base_path.join(media_type_file_name(video_id));
        let size = thumbnail.len();

        let start = std::time::Instant::now();

        // Media type first: a reader that finds the data file also finds its type.
        self.write_atomic(&type_path, thumbnail.media_type.as_bytes())
            .await?;
        self.write_atomic(&data_path, &thumbnail.data).await?;

        tracing::info!(
            path = %data_path.display(),
            video_id = %video_id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local thumbnail write successful"
        );

        Ok(())
    }

    async fn get(&self, video_id: Uuid) -> StorageResult<Option<Thumbnail>> {
        let data_path = self.base_path.join(data_file_name(video_id));
        let type_path = self.base_path.join(media_type_file_name(video_id));

        let data = match fs::read(&data_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read file {}: {}",
                    data_path.display(),
                    e
                )))
            }
        };

        let media_type = fs::read_to_string(&type_path).await.map_err(|e| {
            StorageError::ReadFailed(format!(
                "Failed to read media type {}: {}",
                type_path.display(),
                e
            ))
        })?;

        Ok(Some(Thumbnail::new(data, media_type)))
    }

    fn backend_type(&self) -> ThumbnailBackend {
        ThumbnailBackend::Local
    }
}
