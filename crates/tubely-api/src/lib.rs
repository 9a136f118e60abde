//! Tubely API Library
//!
//! HTTP handlers, authentication, middleware and application setup for the video
//! thumbnail service.

mod api_doc;
mod handlers;
mod middleware;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod auth;
pub mod error;
pub mod state;

// Re-exports
pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
