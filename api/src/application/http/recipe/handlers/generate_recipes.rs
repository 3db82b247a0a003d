use axum::extract::State;
use chefai_core::domain::{
    ingredient::selection::IngredientSelection,
    recipe::{entities::RecipeText, services::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    Generated,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub status: RecipeStatus,
    /// Ingredients actually sent to the model, trimmed and deduplicated
    pub ingredients: Vec<String>,
    /// Recipe text with its header, or the error message when generation failed
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Writes two recipes from the given ingredients in the requested cooking mood. A failing text model is reported with status `failed` and an explanatory text rather than an error status.",
    request_body = GenerateRecipesValidator,
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, description = "No usable ingredients or unknown mood"),
        (status = 500, description = "Recipe prompt template unavailable")
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let cleaned: Vec<String> = payload
        .ingredients
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    let ingredients = IngredientSelection::build(&[], &[], &cleaned).into_items();

    if ingredients.is_empty() {
        return Err(ApiError::ValidationError(
            "ingredients must contain at least one non-blank item".to_string(),
        ));
    }

    let recipes = state
        .service
        .generate_recipes(ingredients.clone(), payload.mood)
        .await
        .map_err(ApiError::from)?;

    let status = match recipes {
        RecipeText::Generated { .. } => RecipeStatus::Generated,
        RecipeText::Failed { .. } => RecipeStatus::Failed,
    };

    Ok(Response::OK(GenerateRecipesResponse {
        status,
        ingredients,
        text: recipes.display_text(),
    }))
}
