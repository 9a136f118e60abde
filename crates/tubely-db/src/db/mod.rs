//! Database repositories for data access layer
//!
//! Each repository owns a clone of the connection pool and maps rows into
//! `tubely_core::models` types.

pub mod video;

pub use video::VideoRepository;
