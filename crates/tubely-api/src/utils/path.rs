//! Path parameter extraction

use crate::error::HttpAppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tubely_core::AppError;
use uuid::Uuid;

/// The `{videoID}` path segment, parsed as a UUID.
///
/// Rejects with `InvalidId` (400) before any other extractor runs, so a malformed id
/// is reported ahead of authentication failures.
#[derive(Debug, Clone, Copy)]
pub struct VideoIdPath(pub Uuid);

impl<S> FromRequestParts<S> for VideoIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;

        let id = Uuid::parse_str(&raw).map_err(AppError::InvalidId)?;
        Ok(VideoIdPath(id))
    }
}
