use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use chefai_core::domain::upload::value_objects::{MAX_IMAGE_BYTES, UploadImageInput};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Request body cap for image uploads: the image itself plus room for the
/// multipart envelope.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_IMAGE_BYTES + 64 * 1024;

pub const IMAGE_FIELD: &str = "image";

/// Pulls the `image` file field out of a multipart form. Other fields are
/// ignored.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<UploadImageInput, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Missing filename in image field".to_string()))?;

        let data = field.bytes().await.map_err(multipart_error)?;

        return Ok(UploadImageInput { file_name, data });
    }

    Err(ApiError::BadRequest("Missing image field".to_string()))
}

/// Maps a multipart read failure, turning the body limit into a 413.
pub fn multipart_error(e: MultipartError) -> ApiError {
    error!("Failed to read multipart field: {}", e);

    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_BYTES
        ))
    } else {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
    }
}
