use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_recipes::{__path_generate_recipes, generate_recipes};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/recipes", state.root_path()),
        post(generate_recipes),
    )
}
