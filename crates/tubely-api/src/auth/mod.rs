//! Authentication: bearer token extraction, HS256 access tokens and the `AuthUser` extractor.

pub mod jwt;
pub mod models;

pub use jwt::{get_bearer_token, make_jwt, validate_jwt, TokenClaims};
pub use models::AuthUser;
