use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::{detection::entities::Detection, ingredient::value_objects::IngredientName};

pub const MAX_RANKED_INGREDIENTS: usize = 15;

/// Generic or non-food names the model tends to emit.
pub const INVALID_TERMS: [&str; 16] = [
    "unknown",
    "other",
    "mixed",
    "variety",
    "assorted",
    "generic",
    "food",
    "item",
    "product",
    "thing",
    "stuff",
    "container",
    "package",
    "wrapper",
    "label",
    "brand",
];

pub const FOOD_CATEGORIES: [&str; 10] = [
    "vegetable",
    "fruit",
    "protein",
    "dairy",
    "pantry",
    "condiment",
    "spice",
    "herb",
    "grain",
    "legume",
];

/// Substrings that mark a name as cooking-related whatever its category.
pub const FOOD_SUBSTRINGS: [&str; 7] = ["oil", "sauce", "spice", "herb", "salt", "pepper", "vinegar"];

pub const HIGH_PRIORITY: [&str; 12] = [
    "onion",
    "garlic",
    "tomato",
    "potato",
    "carrot",
    "bell pepper",
    "olive oil",
    "salt",
    "pepper",
    "eggs",
    "butter",
    "cheese",
];

pub const MEDIUM_PRIORITY: [&str; 12] = [
    "chicken", "beef", "fish", "rice", "pasta", "bread", "milk", "lettuce", "spinach", "broccoli",
    "lemon", "lime",
];

/// Converts detections into a deduplicated, ranked list of ingredient names.
///
/// Names are normalized, non-food and generic entries are dropped, and the
/// survivors are ordered by [`ingredient_priority`]. The sort is stable, so
/// names in the same tier keep the order in which they were first detected.
pub fn suggest_ingredients(detections: &[Detection]) -> Vec<String> {
    if detections.is_empty() {
        warn!("No detections provided for ingredient suggestions");
        return Vec::new();
    }

    let mut ingredients = Vec::new();
    let mut seen = HashSet::new();

    for detection in detections {
        let Some(name) = IngredientName::parse(&detection.name) else {
            continue;
        };
        let category = detection.category.to_lowercase();

        if is_valid_ingredient(name.as_str(), &category) && seen.insert(name.clone()) {
            ingredients.push(name.into_inner());
        }
    }

    ingredients.sort_by_key(|ingredient| ingredient_priority(ingredient));
    ingredients.truncate(MAX_RANKED_INGREDIENTS);

    info!("Generated {} ingredient suggestions", ingredients.len());
    ingredients
}

pub fn is_valid_ingredient(name: &str, category: &str) -> bool {
    if name.chars().count() < 2 {
        return false;
    }

    if INVALID_TERMS.contains(&name) {
        return false;
    }

    FOOD_CATEGORIES.contains(&category) || FOOD_SUBSTRINGS.iter().any(|word| name.contains(word))
}

/// Lower is better: 1 for staples, 2 for common mains, 3 for the rest.
pub fn ingredient_priority(ingredient: &str) -> u8 {
    if HIGH_PRIORITY.contains(&ingredient) {
        1
    } else if MEDIUM_PRIORITY.contains(&ingredient) {
        2
    } else {
        3
    }
}
