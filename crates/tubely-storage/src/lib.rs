//! Tubely Storage Library
//!
//! This crate provides the `ThumbnailStore` abstraction and its backends: an
//! in-memory map (lost on restart) and a local-filesystem directory.
//!
//! # Key format
//!
//! Thumbnails are keyed by video id. On disk the local backend keeps
//! `{video_id}.bin` for the bytes and `{video_id}.type` for the media type;
//! the file names are produced by the `keys` module only.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use factory::create_thumbnail_store;
#[cfg(feature = "storage-local")]
pub use local::LocalThumbnailStore;
pub use memory::MemoryThumbnailStore;
pub use traits::{StorageError, StorageResult, ThumbnailStore};
pub use tubely_core::ThumbnailBackend;
