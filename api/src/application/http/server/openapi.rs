use utoipa::OpenApi;

use crate::application::http::{
    catalog::router::CatalogApiDoc, detection::router::DetectionApiDoc, health::__path_health,
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefAI API",
        description = "Detect ingredients in fridge photos and turn them into recipes"
    ),
    paths(health),
    nest(
        (path = "/api", api = DetectionApiDoc),
        (path = "/api", api = RecipeApiDoc),
        (path = "/api", api = CatalogApiDoc),
    )
)]
pub struct ApiDoc;
