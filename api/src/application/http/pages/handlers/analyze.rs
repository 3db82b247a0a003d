use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use chefai_core::domain::{
    detection::services::DetectionService, upload::value_objects::UploadImageInput,
};
use tracing::{info, warn};

use crate::application::http::{
    pages::{
        picker_upload::read_picker_upload,
        render::{Notice, PageView, RecipePanel, render_page},
        session::SessionContext,
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Runs detection on the uploaded photo and re-renders the page with the
/// suggestions offered in the picker. Picks, custom text and mood posted
/// alongside the photo are kept.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let upload = match read_picker_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return failed_page(&state, SessionContext::default(), e),
    };

    let mut session = match SessionContext::from_form(upload.form) {
        Ok(session) => session,
        Err(e) => return failed_page(&state, SessionContext::default(), e),
    };

    let Some(image) = upload.image else {
        let error = ApiError::BadRequest("Please choose a photo to analyze".to_string());
        return failed_page(&state, session, error);
    };

    let notice = match detect(&state, image).await {
        Ok(suggestions) => {
            let notice = if suggestions.is_empty() {
                Notice::NoDetections
            } else {
                info!("Offering {} suggestions", suggestions.len());
                Notice::Detected(suggestions.len())
            };
            session.replace_suggestions(suggestions);
            notice
        }
        Err(e) => {
            warn!("Photo analysis failed: {}", e);
            return failed_page(&state, session, e);
        }
    };

    (StatusCode::OK, page(&state, &session, notice))
}

async fn detect(state: &AppState, image: UploadImageInput) -> Result<Vec<String>, ApiError> {
    let outcome = state.service.detect_ingredients(image).await?;

    Ok(outcome.suggestions)
}

fn failed_page(
    state: &AppState,
    session: SessionContext,
    error: ApiError,
) -> (StatusCode, Html<String>) {
    let notice = Notice::Error(format!("Error processing image: {error}"));

    (error.status(), page(state, &session, notice))
}

fn page(state: &AppState, session: &SessionContext, notice: Notice) -> Html<String> {
    Html(render_page(&PageView {
        root_path: state.root_path(),
        session,
        notice: Some(notice),
        panel: RecipePanel::Empty,
    }))
}
