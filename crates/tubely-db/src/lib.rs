//! Tubely database layer
//!
//! Defines the `VideoStore` capability consumed by the API and its Postgres
//! implementation. An in-memory implementation is available behind the
//! `test-helpers` feature.

pub mod db;
pub mod store;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use db::VideoRepository;
pub use store::VideoStore;
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::InMemoryVideoStore;
