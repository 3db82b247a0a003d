use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::create_detection::{__path_create_detection, create_detection};
use super::upload::MAX_UPLOAD_BODY_BYTES;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_detection))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/detections", state.root_path()),
            post(create_detection),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
}
