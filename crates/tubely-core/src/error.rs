//! Error types module
//!
//! All failures in the service are expressed as `AppError`. Each variant describes
//! how it is presented over HTTP through the `ErrorMetadata` trait, so handlers only
//! need to return the error and the API layer renders it.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx` feature.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for rejected credentials and ownership mismatches
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_ID")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid ID: {0}")]
    InvalidId(#[source] uuid::Error),

    #[error("Missing bearer token: {0}")]
    MissingToken(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The body is not multipart or carries no usable `thumbnail` part.
    #[error("Unable to parse multipart form: {0}")]
    FormParse(String),

    /// The `thumbnail` part was found but its bytes could not be read.
    #[error("Unable to read form file: {0}")]
    FormRead(String),

    #[error("Video {0} not found")]
    VideoNotFound(Uuid),

    #[error("User {user_id} is not the owner of video {video_id}")]
    NotVideoOwner { video_id: Uuid, user_id: Uuid },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to persist video")]
    Persistence(#[source] Box<AppError>),

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Thumbnail storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wrap a store failure that happened while writing a video record.
    pub fn persistence(err: AppError) -> Self {
        AppError::Persistence(Box::new(err))
    }
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidId(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(format!("Validation error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, bool, LogLevel) {
    match err {
        AppError::InvalidId(_) => (400, "INVALID_ID", false, false, LogLevel::Debug),
        AppError::MissingToken(_) => (401, "MISSING_TOKEN", false, false, LogLevel::Debug),
        AppError::InvalidToken(_) => (401, "INVALID_TOKEN", false, false, LogLevel::Warn),
        AppError::FormParse(_) => (400, "INVALID_FORM", false, false, LogLevel::Debug),
        AppError::FormRead(_) => (400, "UNREADABLE_FORM_FILE", false, false, LogLevel::Debug),
        // Missing records and foreign records share 401 so callers cannot probe for ids.
        AppError::VideoNotFound(_) => (401, "VIDEO_NOT_FOUND", false, false, LogLevel::Debug),
        AppError::NotVideoOwner { .. } => (401, "NOT_VIDEO_OWNER", false, false, LogLevel::Warn),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, false, LogLevel::Debug),
        AppError::Persistence(_) => (500, "PERSISTENCE_ERROR", true, true, LogLevel::Error),
        AppError::Database(_) => (500, "DATABASE_ERROR", true, true, LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidId(_) => "InvalidId",
            AppError::MissingToken(_) => "MissingToken",
            AppError::InvalidToken(_) => "InvalidToken",
            AppError::FormParse(_) => "FormParse",
            AppError::FormRead(_) => "FormRead",
            AppError::VideoNotFound(_) => "VideoNotFound",
            AppError::NotVideoOwner { .. } => "NotVideoOwner",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::Persistence(_) => "Persistence",
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidId(_) => "Invalid ID".to_string(),
            AppError::MissingToken(_) => "Couldn't find token".to_string(),
            AppError::InvalidToken(_) => "Couldn't validate token".to_string(),
            // Both form failures surface the same message; error_type tells them apart.
            AppError::FormParse(_) | AppError::FormRead(_) => {
                "Unable to parse form file".to_string()
            }
            AppError::VideoNotFound(_) => "Video not found".to_string(),
            AppError::NotVideoOwner { .. } => "User is not the owner of the video".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::Persistence(_) => "Contact Admin".to_string(),
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::Storage(_) => "Failed to access thumbnail storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
