//! Shared file naming for storage backends.

use uuid::Uuid;

/// File holding the thumbnail bytes of `video_id`.
pub fn data_file_name(video_id: Uuid) -> String {
    format!("{}.bin", video_id)
}

/// Sidecar file holding the declared media type of `video_id`.
pub fn media_type_file_name(video_id: Uuid) -> String {
    format!("{}.type", video_id)
}
