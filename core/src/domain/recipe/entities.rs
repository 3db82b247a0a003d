use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const RECIPE_HEADER: &str = "**Your AI-Generated Recipes:**\n\n";

pub const CHEF_SYSTEM_PROMPT: &str =
    "You are a professional chef who writes clear, concise, practical recipes.";

/// Cooking mood offered in the picker. Serialized as its display label,
/// which is also what gets substituted into the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Mood {
    #[default]
    #[serde(rename = "🚀 Quick & Easy (5-15 minutes)")]
    QuickAndEasy,
    #[serde(rename = "🏠 Comfort Food Classics")]
    ComfortFood,
    #[serde(rename = "🥗 Healthy & Nutritious")]
    Healthy,
    #[serde(rename = "🍖 Hearty & Filling")]
    Hearty,
    #[serde(rename = "🌟 Creative & Gourmet")]
    Gourmet,
    #[serde(rename = "👨‍👩‍👧‍👦 Family-Friendly")]
    FamilyFriendly,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::QuickAndEasy,
        Mood::ComfortFood,
        Mood::Healthy,
        Mood::Hearty,
        Mood::Gourmet,
        Mood::FamilyFriendly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::QuickAndEasy => "🚀 Quick & Easy (5-15 minutes)",
            Mood::ComfortFood => "🏠 Comfort Food Classics",
            Mood::Healthy => "🥗 Healthy & Nutritious",
            Mood::Hearty => "🍖 Hearty & Filling",
            Mood::Gourmet => "🌟 Creative & Gourmet",
            Mood::FamilyFriendly => "👨‍👩‍👧‍👦 Family-Friendly",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == s)
            .ok_or(CoreError::Invalid)
    }
}

/// Result of a recipe request. A failing text model is not an error for the
/// caller: it gets a message to show instead of recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeText {
    Generated { body: String },
    Failed { cause: String },
}

impl RecipeText {
    pub fn generated(reply: &str) -> Self {
        RecipeText::Generated {
            body: reply.trim().to_string(),
        }
    }

    pub fn failed(cause: impl fmt::Display) -> Self {
        RecipeText::Failed {
            cause: cause.to_string(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, RecipeText::Generated { .. })
    }

    /// The text shown to the user, header or error banner included.
    pub fn display_text(&self) -> String {
        match self {
            RecipeText::Generated { body } => format!("{RECIPE_HEADER}{body}"),
            RecipeText::Failed { cause } => format!(
                "**Error:** Error generating recipes: {cause}\n\nPlease try again or check your OpenAI API configuration."
            ),
        }
    }
}
