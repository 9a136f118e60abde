//! Thumbnail upload integration tests.
//!
//! Run with: `cargo test -p tubely-api --test thumbnail_upload_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;
use helpers::fixtures::{png_form, thumbnail_form};
use helpers::{setup_test_app, setup_test_app_with, test_config};
use tubely_core::models::Video;
use tubely_storage::ThumbnailStore;
use uuid::Uuid;

fn upload_path(video_id: impl std::fmt::Display) -> String {
    format!("/api/thumbnail_upload/{}", video_id)
}

fn error_message(response: &axum_test::TestResponse) -> String {
    let body: serde_json::Value = response.json();
    body["error"].as_str().unwrap_or_default().to_string()
}

fn error_type(response: &axum_test::TestResponse) -> String {
    let body: serde_json::Value = response.json();
    body["error_type"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_upload_sets_thumbnail_url() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 200);

    let updated: Video = response.json();
    assert_eq!(updated.id, video.id);
    assert_eq!(updated.user_id, user_id);
    assert_eq!(updated.title, video.title);
    assert_eq!(updated.description, video.description);
    assert_eq!(updated.created_at, video.created_at);
    assert!(updated.updated_at > video.updated_at);
    assert_eq!(
        updated.thumbnail_url.as_deref(),
        Some(app.thumbnail_url(video.id).as_str())
    );

    // The store keeps the exact bytes and media type.
    let stored = app.thumbnails.get(video.id).await.unwrap().unwrap();
    assert_eq!(stored.data.as_ref(), helpers::fixtures::minimal_png().as_slice());
    assert_eq!(stored.media_type, "image/png");
}

#[tokio::test]
async fn test_upload_persists_record() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    app.client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(png_form())
        .await;

    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", app.bearer(user_id))
        .await;

    assert_eq!(response.status_code(), 200);
    let stored: Video = response.json();
    assert_eq!(
        stored.thumbnail_url.as_deref(),
        Some(app.thumbnail_url(video.id).as_str())
    );
}

#[tokio::test]
async fn test_upload_invalid_id() {
    let app = setup_test_app().await;

    // Checked before authentication: no token needed to get a 400.
    let response = app
        .client()
        .post(&upload_path("not-a-uuid"))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response), "Invalid ID");
}

#[tokio::test]
async fn test_upload_missing_token() {
    let app = setup_test_app().await;
    let video = app.seed_video(Uuid::new_v4()).await;

    let response = app
        .client()
        .post(&upload_path(video.id))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(error_message(&response), "Couldn't find token");

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(error_message(&response), "Couldn't find token");
}

#[tokio::test]
async fn test_upload_invalid_token() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let forged = tubely_api::auth::make_jwt(user_id, "wrong-secret", chrono::Duration::hours(1))
        .unwrap();

    for token in ["garbage".to_string(), forged] {
        let response = app
            .client()
            .post(&upload_path(video.id))
            .add_header("Authorization", format!("Bearer {}", token))
            .multipart(png_form())
            .await;

        assert_eq!(response.status_code(), 401);
        assert_eq!(error_message(&response), "Couldn't validate token");
    }

    let stored: Option<_> = app.thumbnails.get(video.id).await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_upload_expired_token() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let expired = tubely_api::auth::make_jwt(
        user_id,
        helpers::TEST_JWT_SECRET,
        chrono::Duration::hours(-2),
    )
    .unwrap();

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", format!("Bearer {}", expired))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(error_message(&response), "Couldn't validate token");
}

#[tokio::test]
async fn test_upload_without_thumbnail_field() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(Bytes::from(helpers::fixtures::minimal_png()))
            .file_name("thumb.png")
            .mime_type("image/png"),
    );

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response), "Unable to parse form file");
    assert_eq!(error_type(&response), "FormParse");
}

#[tokio::test]
async fn test_upload_thumbnail_as_text_field() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let form = MultipartForm::new().add_text("thumbnail", "not a file");

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response), "Unable to parse form file");
    assert_eq!(error_type(&response), "FormParse");
}

#[tokio::test]
async fn test_upload_finds_file_after_text_field_of_same_name() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let form = MultipartForm::new()
        .add_text("thumbnail", "not a file")
        .add_part(
            "thumbnail",
            Part::bytes(Bytes::from(helpers::fixtures::minimal_png()))
                .file_name("thumb.png")
                .mime_type("image/png"),
        );

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let stored = app.thumbnails.get(video.id).await.unwrap().unwrap();
    assert_eq!(stored.data.as_ref(), helpers::fixtures::minimal_png().as_slice());
}

#[tokio::test]
async fn test_upload_non_multipart_body() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .json(&serde_json::json!({ "thumbnail": "data" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response), "Unable to parse form file");
}

#[tokio::test]
async fn test_upload_unknown_video() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let missing_id = Uuid::new_v4();

    let response = app
        .client()
        .post(&upload_path(missing_id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(error_message(&response), "Video not found");
    assert!(app.thumbnails.is_empty().await);
}

#[tokio::test]
async fn test_upload_by_non_owner() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(intruder))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(error_message(&response), "User is not the owner of the video");

    // Nothing stored, record untouched.
    assert!(app.thumbnails.get(video.id).await.unwrap().is_none());
    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", app.bearer(owner))
        .await;
    let stored: Video = response.json();
    assert_eq!(stored, video);
}

#[tokio::test]
async fn test_reupload_replaces_thumbnail() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let first: Video = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(png_form())
        .await
        .json();

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(thumbnail_form(vec![0xFF, 0xD8, 0xFF, 0xE0], "thumb.jpg", "image/jpeg"))
        .await;

    assert_eq!(response.status_code(), 200);
    let second: Video = response.json();
    assert_eq!(second.thumbnail_url, first.thumbnail_url);
    assert_eq!(second.created_at, video.created_at);
    assert!(second.updated_at > first.updated_at);

    let stored = app.thumbnails.get(video.id).await.unwrap().unwrap();
    assert_eq!(stored.data.as_ref(), &[0xFF, 0xD8, 0xFF, 0xE0]);
    assert_eq!(stored.media_type, "image/jpeg");
    assert_eq!(app.thumbnails.len().await, 1);
}

#[tokio::test]
async fn test_upload_skips_unrelated_fields() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let form = MultipartForm::new()
        .add_text("caption", "boots")
        .add_part(
            "thumbnail",
            Part::bytes(Bytes::from(helpers::fixtures::minimal_png()))
                .file_name("thumb.png")
                .mime_type("image/png"),
        );

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_upload_update_failure_reports_contact_admin() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;
    app.videos.fail_updates(true);

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Contact Admin");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_upload_over_size_limit() {
    let mut config = test_config();
    config.0.max_request_body_bytes = 1024;
    let app = setup_test_app_with(config).await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(thumbnail_form(vec![0u8; 64 * 1024], "big.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response), "Unable to parse form file");
    assert_eq!(error_type(&response), "FormRead");
    assert!(app.thumbnails.get(video.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_upload_file_larger_than_ten_mib() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id).await;
    let data = vec![0xABu8; 11 * 1024 * 1024];

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", app.bearer(user_id))
        .multipart(thumbnail_form(data.clone(), "big.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 200);
    let stored = app.thumbnails.get(video.id).await.unwrap().unwrap();
    assert_eq!(stored.data.len(), data.len());
}
