use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

static PLACEHOLDER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{(ingredients|mood)\}"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: u32,
}

impl SamplingParams {
    pub fn recipe() -> Self {
        Self {
            temperature: 0.7,
            top_p: Some(0.9),
            max_tokens: 800,
        }
    }
}

/// Prompt text with `{ingredients}` and `{mood}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTemplate(String);

impl RecipeTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, ingredients: &[String], mood: &str) -> String {
        format_recipe_prompt(&self.0, ingredients, mood)
    }
}

/// Substitutes the comma-joined ingredients and the mood label into the
/// template in a single pass, so substituted text is never scanned again.
/// Every occurrence of a placeholder is replaced; other braces are left
/// alone.
pub fn format_recipe_prompt(template: &str, ingredients: &[String], mood: &str) -> String {
    let joined = ingredients.join(", ");

    match PLACEHOLDER.as_ref() {
        Ok(regex) => regex
            .replace_all(template, |captures: &Captures| match &captures[1] {
                "ingredients" => joined.clone(),
                _ => mood.to_string(),
            })
            .into_owned(),
        Err(e) => {
            tracing::error!("Invalid placeholder pattern: {}", e);
            template.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_recipe_prompt() {
        let ingredients = vec![
            "chicken".to_string(),
            "cheese".to_string(),
            "onions".to_string(),
        ];

        let prompt = format_recipe_prompt(
            "Use {ingredients}. Mood: {mood}.",
            &ingredients,
            "Quick & Easy",
        );

        assert_eq!(prompt, "Use chicken, cheese, onions. Mood: Quick & Easy.");
    }

    #[test]
    fn test_placeholders_can_repeat_and_other_braces_survive() {
        let template = RecipeTemplate::new("{mood} / {mood} / {ingredients} / {\"json\": 1}");

        assert_eq!(
            template.render(&["rice".to_string()], "cozy"),
            "cozy / cozy / rice / {\"json\": 1}"
        );
    }

    #[test]
    fn test_substituted_ingredients_are_not_rescanned() {
        let prompt = format_recipe_prompt(
            "I: {ingredients}. M: {mood}",
            &["{mood} sauce".to_string(), "{ingredients}".to_string()],
            "Healthy",
        );

        assert_eq!(prompt, "I: {mood} sauce, {ingredients}. M: Healthy");
    }

    #[test]
    fn test_chat_message_serializes_role_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "hi"}));
    }
}
