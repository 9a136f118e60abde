//! Test helpers: build AppState and router for integration tests.
//!
//! The router is the production one from `setup::routes`, backed by the in-memory video
//! store and the in-memory thumbnail store, so no database is needed.
//! Run with: `cargo test -p tubely-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use chrono::Duration;
use std::sync::Arc;
use tubely_api::auth::make_jwt;
use tubely_api::setup::routes;
use tubely_api::state::AppState;
use tubely_core::models::{CreateVideoParams, Video};
use tubely_core::{BaseConfig, Config, ThumbnailBackend, ThumbnailServiceConfig};
use tubely_db::{InMemoryVideoStore, VideoStore};
use tubely_storage::MemoryThumbnailStore;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";
pub const TEST_PORT: u16 = 8091;

/// Test application: server plus handles on the stores behind it.
pub struct TestApp {
    pub server: TestServer,
    pub videos: InMemoryVideoStore,
    pub thumbnails: Arc<MemoryThumbnailStore>,
    pub config: Config,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Valid access token for `user_id`.
    pub fn token_for(&self, user_id: Uuid) -> String {
        make_jwt(user_id, TEST_JWT_SECRET, Duration::hours(1)).expect("sign token")
    }

    pub fn bearer(&self, user_id: Uuid) -> String {
        format!("Bearer {}", self.token_for(user_id))
    }

    /// Insert a video record owned by `user_id`.
    pub async fn seed_video(&self, user_id: Uuid) -> Video {
        self.videos
            .create_video(CreateVideoParams {
                title: "Boots".to_string(),
                description: "A video about boots".to_string(),
                user_id,
            })
            .await
            .expect("seed video")
    }

    pub fn thumbnail_url(&self, video_id: Uuid) -> String {
        format!(
            "http://localhost:{}/api/thumbnails/{}",
            TEST_PORT, video_id
        )
    }
}

pub fn test_config() -> Config {
    Config(Box::new(ThumbnailServiceConfig {
        base: BaseConfig {
            server_port: TEST_PORT,
            cors_origins: vec!["*".to_string()],
            db_max_connections: 5,
            db_timeout_seconds: 30,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_expiry_hours: 24,
            environment: "development".to_string(),
        },
        database_url: "postgres://unused".to_string(),
        max_request_body_bytes: 100 << 20,
        thumbnail_backend: ThumbnailBackend::Memory,
        thumbnail_store_path: None,
    }))
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config()).await
}

pub async fn setup_test_app_with(config: Config) -> TestApp {
    let videos = InMemoryVideoStore::new();
    let thumbnails = Arc::new(MemoryThumbnailStore::new());

    let state = AppState::new(
        config.clone(),
        Arc::new(videos.clone()),
        thumbnails.clone(),
    );

    let app = routes::setup_routes(&config, state)
        .await
        .expect("Failed to build routes");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        videos,
        thumbnails,
        config,
    }
}
