use std::path::Path;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10MB

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq)]
pub struct UploadImageInput {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadImageInput {
    /// Checks the upload can be staged and returns its sanitized file name
    /// together with the media type declared to the vision model.
    pub fn validate(&self) -> Result<(String, &'static str), CoreError> {
        let file_name = sanitize_file_name(&self.file_name)?;
        let media_type = media_type_for(&file_name)?;

        if self.data.is_empty() {
            return Err(CoreError::EmptyUpload);
        }

        if self.data.len() > MAX_IMAGE_BYTES {
            return Err(CoreError::FileTooLarge);
        }

        Ok((file_name, media_type))
    }
}

/// Keeps only the final path component so uploads cannot escape the
/// scratch directory.
pub fn sanitize_file_name(raw: &str) -> Result<String, CoreError> {
    let normalized = raw.replace('\\', "/");

    Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && name != "..")
        .ok_or(CoreError::Invalid)
}

pub fn media_type_for(file_name: &str) -> Result<&'static str, CoreError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        other => Err(CoreError::UnsupportedMediaType(if other.is_empty() {
            file_name.to_string()
        } else {
            other.to_string()
        })),
    }
}
