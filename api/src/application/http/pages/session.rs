//! Per-request picker state.
//!
//! Nothing is kept on the server between requests. The suggestions from the
//! last photo travel back and forth as hidden `suggested` fields, and the
//! rest of the picker is whatever the user ticked in the submitted form.

use chefai_core::domain::{
    ingredient::{
        catalog::is_catalog_ingredient,
        selection::{IngredientSelection, SelectionStats, parse_custom_ingredients},
    },
    recipe::entities::Mood,
};
use serde::Deserialize;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Fields posted by the ingredient picker. Repeated keys collect into the
/// vectors.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub suggested: Vec<String>,
    #[serde(default)]
    pub ai: Vec<String>,
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub custom: String,
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub suggested: Vec<String>,
    pub selected_ai: Vec<String>,
    pub selected_common: Vec<String>,
    pub custom_text: String,
    pub custom: Vec<String>,
    pub mood: Mood,
}

impl SessionContext {
    pub fn with_suggestions(suggested: Vec<String>) -> Self {
        Self {
            suggested,
            ..Self::default()
        }
    }

    /// Rebuilds the picker from a submitted form. AI picks must come from the
    /// carried suggestions and catalog picks from the catalog; anything else
    /// is dropped.
    pub fn from_form(form: RecipeForm) -> Result<Self, ApiError> {
        let mood = match form.mood.as_deref().map(str::trim) {
            None | Some("") => Mood::default(),
            Some(label) => label
                .parse::<Mood>()
                .map_err(|_| ApiError::BadRequest(format!("Unknown cooking mood: {label}")))?,
        };

        let suggested = form.suggested;
        let selected_ai = form
            .ai
            .into_iter()
            .filter(|item| suggested.contains(item))
            .collect();
        let selected_common = form
            .common
            .into_iter()
            .filter(|item| is_catalog_ingredient(item))
            .collect();
        let custom = parse_custom_ingredients(&form.custom);

        Ok(Self {
            suggested,
            selected_ai,
            selected_common,
            custom_text: form.custom,
            custom,
            mood,
        })
    }

    /// Swaps in the suggestions from a new photo. AI picks that are no
    /// longer suggested are dropped.
    pub fn replace_suggestions(&mut self, suggested: Vec<String>) {
        self.selected_ai.retain(|item| suggested.contains(item));
        self.suggested = suggested;
    }

    pub fn selection(&self) -> IngredientSelection {
        IngredientSelection::build(&self.selected_ai, &self.selected_common, &self.custom)
    }

    pub fn stats(&self, selection: &IngredientSelection) -> SelectionStats {
        selection.stats(&self.suggested, &self.selected_common, &self.custom)
    }
}
