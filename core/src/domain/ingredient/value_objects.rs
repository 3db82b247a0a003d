use std::fmt;

use serde::Serialize;

/// Descriptor and packaging words dropped from detected names.
pub const STOP_WORDS: [&str; 14] = [
    "fresh",
    "organic",
    "bottle",
    "jar",
    "can",
    "package",
    "container",
    "bag",
    "box",
    "carton",
    "tube",
    "frozen",
    "canned",
    "dried",
];

/// Whole-name rewrites applied after stop words are removed.
pub const SYNONYMS: [(&str, &str); 8] = [
    ("bell pepper", "bell peppers"),
    ("red pepper", "red bell pepper"),
    ("green pepper", "green bell pepper"),
    ("yellow pepper", "yellow bell pepper"),
    ("soy sauce", "soy sauce"),
    ("olive oil", "olive oil"),
    ("cooking oil", "cooking oil"),
    ("vegetable oil", "vegetable oil"),
];

/// A cleaned ingredient name: lowercase, trimmed, descriptors stripped and
/// synonyms applied. May still be rejected by the ranker's validity rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IngredientName(String);

impl IngredientName {
    /// Returns `None` for names that are blank before normalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        Some(Self(normalize_ingredient_name(&lowered)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_ingredient_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let clean_name = lowered
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");

    SYNONYMS
        .iter()
        .find(|(from, _)| *from == clean_name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(clean_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_removed() {
        assert_eq!(normalize_ingredient_name("fresh organic garlic"), "garlic");
        assert_eq!(normalize_ingredient_name("olive oil bottle"), "olive oil");
        assert_eq!(normalize_ingredient_name("can of tomatoes"), "of tomatoes");
    }

    #[test]
    fn test_synonyms_match_whole_name_only() {
        assert_eq!(normalize_ingredient_name("red pepper"), "red bell pepper");
        assert_eq!(normalize_ingredient_name("fresh green pepper"), "green bell pepper");
        assert_eq!(normalize_ingredient_name("bell pepper"), "bell peppers");
        assert_eq!(normalize_ingredient_name("roasted red pepper"), "roasted red pepper");
        assert_eq!(normalize_ingredient_name("red bell pepper"), "red bell pepper");
    }

    #[test]
    fn test_parse_lowercases_and_trims() {
        let name = IngredientName::parse("  Fresh Organic Garlic ").unwrap();
        assert_eq!(name.as_str(), "garlic");
        assert!(IngredientName::parse("   ").is_none());
    }

    #[test]
    fn test_only_descriptor_words_leave_empty_name() {
        assert_eq!(IngredientName::parse("Frozen Bag").unwrap().as_str(), "");
    }
}
