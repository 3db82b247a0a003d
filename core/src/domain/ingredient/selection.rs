use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Splits the free-text ingredient box on commas.
pub fn parse_custom_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// The final ingredient list for one interaction: the union of AI-picked,
/// catalog-picked and typed-in ingredients, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSelection {
    items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionStats {
    pub total: usize,
    pub ai_detected: usize,
    pub manually_added: usize,
}

impl IngredientSelection {
    pub fn build(ai: &[String], common: &[String], custom: &[String]) -> Self {
        let mut seen = HashSet::new();
        let items = ai
            .iter()
            .chain(common)
            .chain(custom)
            .filter(|item| seen.insert(item.as_str()))
            .cloned()
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    /// Counts shown above the recipe generator. Manual additions are counted
    /// per picker, so an item picked twice counts twice there.
    pub fn stats(&self, suggested: &[String], common: &[String], custom: &[String]) -> SelectionStats {
        SelectionStats {
            total: self.items.len(),
            ai_detected: self
                .items
                .iter()
                .filter(|item| suggested.contains(item))
                .count(),
            manually_added: common.len() + custom.len(),
        }
    }
}
