use chefai_core::domain::recipe::entities::Mood;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesValidator {
    #[validate(length(
        min = 1,
        max = 50,
        message = "ingredients must contain between 1 and 50 items"
    ))]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub mood: Mood,
}
