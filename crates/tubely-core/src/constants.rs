//! Constants shared across crates.

/// Issuer written into and required from every access token.
pub const TOKEN_ISSUER: &str = "tubely-access";

/// Multipart field carrying the thumbnail image.
pub const THUMBNAIL_FORM_FIELD: &str = "thumbnail";

/// Media type recorded when the thumbnail part declares none.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Path prefix under which stored thumbnails are served.
pub const THUMBNAILS_PATH: &str = "/api/thumbnails";
