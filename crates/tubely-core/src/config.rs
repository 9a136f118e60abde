//! Configuration module
//!
//! Process-wide settings loaded once at startup from the environment (and an optional
//! `.env` file): server port, token secret, database connection, upload limits and the
//! thumbnail store backend.

use std::env;

use crate::storage_types::ThumbnailBackend;

const SERVER_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const JWT_EXPIRY_HOURS: i64 = 24;
const MAX_REQUEST_BODY_MB: usize = 100;

/// Settings every binary in the workspace needs
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub environment: String,
}

/// Thumbnail service configuration
#[derive(Clone, Debug)]
pub struct ThumbnailServiceConfig {
    pub base: BaseConfig,
    pub database_url: String,
    /// Ceiling for a whole upload request body, in bytes
    pub max_request_body_bytes: usize,
    pub thumbnail_backend: ThumbnailBackend,
    /// Directory for the `local` thumbnail backend
    pub thumbnail_store_path: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ThumbnailServiceConfig>);

impl Config {
    fn as_service(&self) -> &ThumbnailServiceConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ThumbnailServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.as_service().base.environment)
    }

    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn jwt_secret(&self) -> &str {
        &self.as_service().base.jwt_secret
    }

    pub fn jwt_expiry_hours(&self) -> i64 {
        self.as_service().base.jwt_expiry_hours
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn db_max_connections(&self) -> u32 {
        self.as_service().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.as_service().base.db_timeout_seconds
    }

    pub fn database_url(&self) -> &str {
        &self.as_service().database_url
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.as_service().max_request_body_bytes
    }

    pub fn thumbnail_backend(&self) -> ThumbnailBackend {
        self.as_service().thumbnail_backend
    }

    pub fn thumbnail_store_path(&self) -> Option<&str> {
        self.as_service().thumbnail_store_path.as_deref()
    }

    /// Public URL under which the thumbnail of `video_id` is served.
    pub fn thumbnail_url(&self, video_id: uuid::Uuid) -> String {
        format!(
            "http://localhost:{}{}/{}",
            self.server_port(),
            crate::constants::THUMBNAILS_PATH,
            video_id
        )
    }
}

fn is_production_name(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

impl ThumbnailServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        if is_production_name(&environment) && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| JWT_EXPIRY_HOURS.to_string())
                .parse()
                .unwrap_or(JWT_EXPIRY_HOURS),
            environment,
        };

        let max_request_body_mb = env::var("MAX_REQUEST_BODY_MB")
            .unwrap_or_else(|_| MAX_REQUEST_BODY_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_REQUEST_BODY_MB);

        let thumbnail_backend = match env::var("THUMBNAIL_STORE") {
            Ok(value) => value.parse()?,
            Err(_) => ThumbnailBackend::Memory,
        };

        let config = ThumbnailServiceConfig {
            base,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            max_request_body_bytes: max_request_body_mb * 1024 * 1024,
            thumbnail_backend,
            thumbnail_store_path: env::var("THUMBNAIL_STORE_PATH").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.thumbnail_backend == ThumbnailBackend::Local
            && self.thumbnail_store_path.is_none()
        {
            return Err(anyhow::anyhow!(
                "THUMBNAIL_STORE_PATH must be set when THUMBNAIL_STORE=local"
            ));
        }
        Ok(())
    }
}
