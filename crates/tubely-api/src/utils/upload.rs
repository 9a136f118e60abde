//! Multipart upload helpers

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use tubely_core::constants::DEFAULT_MEDIA_TYPE;
use tubely_core::models::Thumbnail;
use tubely_core::AppError;

/// Unwrap the multipart extractor result, turning a bad `Content-Type` into a form error.
pub fn require_multipart(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Multipart, AppError> {
    multipart.map_err(|rejection| AppError::FormParse(rejection.body_text()))
}

/// Running past the body limit is a read failure, wherever in the form it happens.
/// Anything else while walking the parts is a malformed form.
fn classify_multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FormRead(format!("Failed to read file data: {}", err.body_text()))
    } else {
        AppError::FormParse(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Read the file part called `field_name` from the form.
///
/// Other fields are skipped. The part must carry a filename, as a browser file input
/// does; a plain text field with the same name is skipped too, and the search goes on.
/// A part without its own `Content-Type` is recorded as `application/octet-stream`.
pub async fn extract_form_file(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Thumbnail, AppError> {
    let mut saw_text_field = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(classify_multipart_error)?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        if field.file_name().is_none() {
            saw_text_field = true;
            continue;
        }

        let media_type = field
            .content_type()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::FormRead(format!("Failed to read file data: {}", e)))?;

        return Ok(Thumbnail::new(data, media_type));
    }

    if saw_text_field {
        return Err(AppError::FormParse(format!(
            "Field '{}' is not a file part",
            field_name
        )));
    }

    Err(AppError::FormParse(format!(
        "No file provided in field '{}'",
        field_name
    )))
}
