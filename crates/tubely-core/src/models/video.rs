use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Video record as stored in the `videos` table and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub title: String,
    pub description: String,
    pub user_id: Uuid,
}

impl Video {
    /// Build a fresh record owned by `params.user_id`, with no URLs yet.
    pub fn new(params: CreateVideoParams, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(6);
        Video {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            thumbnail_url: None,
            video_url: None,
            title: params.title,
            description: params.description,
            user_id: params.user_id,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Copy of this record pointing at a new thumbnail.
    ///
    /// Everything but `thumbnail_url` and `updated_at` is carried over. `updated_at`
    /// always moves forward, by one microsecond when `now` is not past the stored value.
    /// Timestamps are truncated to microseconds, the precision Postgres keeps.
    pub fn with_thumbnail_url(&self, thumbnail_url: String, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(6);
        let updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };

        Video {
            id: self.id,
            created_at: self.created_at,
            updated_at,
            thumbnail_url: Some(thumbnail_url),
            video_url: self.video_url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            user_id: self.user_id,
        }
    }
}

/// Fields needed to insert a new video record
#[derive(Debug, Clone)]
pub struct CreateVideoParams {
    pub title: String,
    pub description: String,
    pub user_id: Uuid,
}

/// Request DTO for creating a video record
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: String,
}
