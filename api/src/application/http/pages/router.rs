use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use super::handlers::{analyze::analyze, index::index, recipes::recipes};
use crate::application::http::{
    detection::upload::MAX_UPLOAD_BODY_BYTES, server::app_state::AppState,
};

pub fn page_routes(state: AppState) -> Router<AppState> {
    let root_path = state.root_path();

    let router = Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(
            &format!("{}/analyze", root_path),
            post(analyze).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        .route(&format!("{}/recipes", root_path), post(recipes));

    // `/chefai` as well as `/chefai/`
    if root_path.is_empty() {
        router
    } else {
        router.route(root_path, get(index))
    }
}
