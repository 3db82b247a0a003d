use axum::extract::Multipart;
use chefai_core::domain::upload::value_objects::UploadImageInput;

use crate::application::http::{
    detection::upload::{IMAGE_FIELD, multipart_error},
    pages::session::RecipeForm,
    server::api_entities::api_error::ApiError,
};

/// A photo posted together with the current state of the picker.
#[derive(Debug, Default)]
pub struct PickerUpload {
    /// `None` when the file input was left empty
    pub image: Option<UploadImageInput>,
    pub form: RecipeForm,
}

/// Reads the multipart body of the page form: the `image` file plus the same
/// picker fields `/recipes` receives. Unknown fields are ignored.
pub async fn read_picker_upload(mut multipart: Multipart) -> Result<PickerUpload, ApiError> {
    let mut upload = PickerUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(multipart_error)?;

            // Browsers send an empty, unnamed part for an untouched file input
            if !file_name.is_empty() || !data.is_empty() {
                upload.image = Some(UploadImageInput { file_name, data });
            }
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "suggested" => upload.form.suggested.push(value),
            "ai" => upload.form.ai.push(value),
            "common" => upload.form.common.push(value),
            "custom" => upload.form.custom = value,
            "mood" => upload.form.mood = Some(value),
            _ => {}
        }
    }

    Ok(upload)
}
