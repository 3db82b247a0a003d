use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_catalog::{__path_get_catalog, get_catalog},
    get_moods::{__path_get_moods, get_moods},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_catalog, get_moods))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/catalog", state.root_path()),
            get(get_catalog),
        )
        .route(&format!("{}/api/moods", state.root_path()), get(get_moods))
}
