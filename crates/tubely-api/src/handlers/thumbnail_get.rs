use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::path::VideoIdPath;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
};
use std::sync::Arc;
use tubely_core::constants::DEFAULT_MEDIA_TYPE;
use tubely_core::AppError;

#[utoipa::path(
    get,
    path = "/api/thumbnails/{videoID}",
    tag = "thumbnails",
    params(
        ("videoID" = uuid::Uuid, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Thumbnail bytes with their stored media type"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Thumbnail not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %video_id, operation = "get_thumbnail"))]
pub async fn get_thumbnail(
    State(state): State<Arc<AppState>>,
    VideoIdPath(video_id): VideoIdPath,
) -> Result<impl IntoResponse, HttpAppError> {
    let thumbnail = state
        .thumbnails
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Thumbnail not found".to_string()))?;

    // Stored media types come from clients; fall back rather than fail on one that is not a valid header.
    let content_type = HeaderValue::from_str(&thumbnail.media_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_MEDIA_TYPE));

    Ok(([(header::CONTENT_TYPE, content_type)], thumbnail.data))
}
