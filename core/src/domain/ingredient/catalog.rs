use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tab of the manual ingredient picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCategory {
    pub name: String,
    pub items: Vec<String>,
}

const COMMON_FRIDGE_INGREDIENTS: [(&str, &[&str]); 5] = [
    (
        "Proteins",
        &["eggs", "chicken", "beef", "fish", "tofu", "cheese", "yogurt", "milk"],
    ),
    (
        "Vegetables",
        &[
            "tomatoes",
            "onions",
            "carrots",
            "bell peppers",
            "lettuce",
            "spinach",
            "broccoli",
            "potatoes",
        ],
    ),
    (
        "Fruits",
        &["apples", "bananas", "oranges", "berries", "lemons", "limes"],
    ),
    (
        "Pantry",
        &["bread", "rice", "pasta", "flour", "oil", "salt", "pepper", "garlic"],
    ),
    (
        "Condiments",
        &[
            "butter",
            "mayonnaise",
            "ketchup",
            "mustard",
            "soy sauce",
            "hot sauce",
        ],
    ),
];

/// Categorized refrigerator and pantry staples offered for manual selection.
pub fn get_common_fridge_ingredients() -> Vec<CatalogCategory> {
    COMMON_FRIDGE_INGREDIENTS
        .iter()
        .map(|(name, items)| CatalogCategory {
            name: name.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        })
        .collect()
}

pub fn is_catalog_ingredient(ingredient: &str) -> bool {
    COMMON_FRIDGE_INGREDIENTS
        .iter()
        .any(|(_, items)| items.contains(&ingredient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_layout() {
        let catalog = get_common_fridge_ingredients();
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Proteins", "Vegetables", "Fruits", "Pantry", "Condiments"]
        );
        assert_eq!(catalog[1].items.len(), 8);
        assert_eq!(catalog[4].items.last().map(String::as_str), Some("hot sauce"));
    }

    #[test]
    fn test_membership() {
        assert!(is_catalog_ingredient("soy sauce"));
        assert!(!is_catalog_ingredient("saffron"));
    }
}
