//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use tubely_core::models;

/// Registers the `bearer_auth` scheme referenced by the authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tubely API",
        version = "0.1.0",
        description = "Video records and their thumbnails. Thumbnails are uploaded as multipart forms by the video owner and served publicly by video id."
    ),
    paths(
        // Thumbnails
        handlers::thumbnail_upload::upload_thumbnail,
        handlers::thumbnail_get::get_thumbnail,
        // Videos
        handlers::video::create_video,
        handlers::video::get_video,
    ),
    components(
        schemas(
            models::Video,
            models::CreateVideoRequest,
            error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "thumbnails", description = "Thumbnail upload and retrieval"),
        (name = "videos", description = "Video record management")
    )
)]
pub struct ApiDoc;
