use axum::extract::{Multipart, State};
use chefai_core::domain::detection::{entities::DetectionOutcome, services::DetectionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    detection::upload::read_image_upload,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateDetectionResponse {
    pub data: DetectionOutcome,
}

#[utoipa::path(
    post,
    path = "/detections",
    tag = "detection",
    summary = "Detect ingredients in a photo",
    description = "Stages the uploaded fridge or pantry photo, asks the vision model what it contains and returns the detections above the confidence threshold together with up to ten ranked ingredient suggestions.",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field (jpg, jpeg or png, at most 10 MB)"),
    responses(
        (status = 200, body = CreateDetectionResponse),
        (status = 400, description = "Missing or empty image"),
        (status = 413, description = "Image too large"),
        (status = 415, description = "Unsupported image type"),
        (status = 502, description = "Vision model unavailable")
    ),
)]
pub async fn create_detection(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<CreateDetectionResponse>, ApiError> {
    let input = read_image_upload(multipart).await?;

    let outcome = state
        .service
        .detect_ingredients(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateDetectionResponse { data: outcome }))
}
