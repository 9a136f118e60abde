//! Data models for the application
//!
//! Video records live in the database; thumbnails live in the thumbnail store.

mod thumbnail;
mod video;

// Re-export all models for convenient imports
pub use thumbnail::Thumbnail;
pub use video::{CreateVideoParams, CreateVideoRequest, Video};
