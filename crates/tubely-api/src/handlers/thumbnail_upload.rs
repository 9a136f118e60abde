use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::path::VideoIdPath;
use crate::utils::upload::{extract_form_file, require_multipart};
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tubely_core::constants::THUMBNAIL_FORM_FIELD;
use tubely_core::models::Video;
use tubely_core::AppError;

/// Attach a thumbnail image to a video the caller owns.
///
/// The image is stored under the video id (replacing any earlier one) and the record's
/// `thumbnail_url` is pointed at the public thumbnail endpoint.
#[utoipa::path(
    post,
    path = "/api/thumbnail_upload/{videoID}",
    tag = "thumbnails",
    params(
        ("videoID" = uuid::Uuid, Path, description = "Video ID")
    ),
    request_body(content_type = "multipart/form-data", description = "Form with a `thumbnail` file part"),
    responses(
        (status = 200, description = "Thumbnail stored; updated video record", body = Video),
        (status = 400, description = "Invalid ID or unreadable form", body = ErrorResponse),
        (status = 401, description = "Missing/invalid token, unknown video, or caller is not the owner", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(
        user_id = %user.user_id,
        video_id = %video_id,
        operation = "upload_thumbnail"
    )
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    VideoIdPath(video_id): VideoIdPath,
    user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    tracing::info!("Uploading thumbnail");

    let thumbnail = extract_form_file(require_multipart(multipart)?, THUMBNAIL_FORM_FIELD).await?;

    let video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or(AppError::VideoNotFound(video_id))?;

    if !video.is_owned_by(user.user_id) {
        return Err(AppError::NotVideoOwner {
            video_id,
            user_id: user.user_id,
        }
        .into());
    }

    let size_bytes = thumbnail.len();
    let media_type = thumbnail.media_type.clone();
    state.thumbnails.put(video_id, thumbnail).await?;

    let updated = video.with_thumbnail_url(state.config.thumbnail_url(video_id), Utc::now());
    state
        .videos
        .update_video(&updated)
        .await
        .map_err(AppError::persistence)?;

    tracing::info!(
        size_bytes,
        media_type = %media_type,
        "Thumbnail stored"
    );

    Ok(Json(updated))
}
