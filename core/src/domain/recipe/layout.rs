//! Line classification of recipe text for display.
//!
//! The text model is asked for a loose "Recipe 1 / Name: / Ingredients: /
//! Instructions: / Total time:" shape. Lines are classified in order into a
//! flat sequence of blocks; list open and close events are explicit so a
//! renderer never has to track state.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::recipe::entities::RECIPE_HEADER;

static NUMBERED_STEP: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\d[^.]*\.\s*(.*)$"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeBlock {
    /// Starts recipe `index` (1 or 2); the line itself is the title.
    RecipeStart { index: u8, title: String },
    RecipeEnd,
    Heading(String),
    BulletListStart,
    BulletListEnd,
    NumberedListStart,
    NumberedListEnd,
    Bullet(String),
    Step(String),
    Break,
    Paragraph(String),
}

#[derive(Default)]
struct LayoutState {
    blocks: Vec<RecipeBlock>,
    current_recipe: Option<u8>,
    in_ingredients: bool,
    in_instructions: bool,
}

impl LayoutState {
    fn close_lists(&mut self) {
        if self.in_ingredients {
            self.blocks.push(RecipeBlock::BulletListEnd);
            self.in_ingredients = false;
        }
        if self.in_instructions {
            self.blocks.push(RecipeBlock::NumberedListEnd);
            self.in_instructions = false;
        }
    }

    fn start_recipe(&mut self, index: u8, title: &str) {
        self.close_lists();
        if self.current_recipe.is_some() {
            self.blocks.push(RecipeBlock::RecipeEnd);
        }
        self.current_recipe = Some(index);
        self.blocks.push(RecipeBlock::RecipeStart {
            index,
            title: title.to_string(),
        });
    }

    fn finish(mut self) -> Vec<RecipeBlock> {
        self.close_lists();
        if self.current_recipe.is_some() {
            self.blocks.push(RecipeBlock::RecipeEnd);
        }
        self.blocks
    }
}

/// Classifies recipe text line by line. The recipe header, if present, is
/// dropped first.
pub fn classify_recipe_text(text: &str) -> Vec<RecipeBlock> {
    let cleaned = text.replace(RECIPE_HEADER.trim_end(), "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut state = LayoutState::default();

    for raw_line in cleaned.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            state.blocks.push(RecipeBlock::Break);
            continue;
        }

        let lower = line.to_lowercase();

        if lower.contains("recipe 1") {
            state.start_recipe(1, line);
        } else if lower.contains("recipe 2") {
            state.start_recipe(2, line);
        } else if lower.starts_with("name:") {
            state.blocks.push(RecipeBlock::Heading(line.to_string()));
        } else if lower.starts_with("ingredients:") {
            state.close_lists();
            state.blocks.push(RecipeBlock::Heading(line.to_string()));
            state.blocks.push(RecipeBlock::BulletListStart);
            state.in_ingredients = true;
        } else if lower.starts_with("instructions:") {
            state.close_lists();
            state.blocks.push(RecipeBlock::Heading(line.to_string()));
            state.blocks.push(RecipeBlock::NumberedListStart);
            state.in_instructions = true;
        } else if lower.starts_with("total time:") {
            state.close_lists();
            state.blocks.push(RecipeBlock::Heading(line.to_string()));
        } else if state.in_ingredients
            && let Some(item) = line.strip_prefix("- ")
        {
            state.blocks.push(RecipeBlock::Bullet(item.to_string()));
        } else if state.in_instructions
            && let Some(step) = numbered_step(line)
        {
            state.blocks.push(RecipeBlock::Step(step));
        } else {
            state.blocks.push(RecipeBlock::Paragraph(line.to_string()));
        }
    }

    state.finish()
}

/// `"2. Whisk the eggs"` -> `"Whisk the eggs"`
fn numbered_step(line: &str) -> Option<String> {
    let regex = NUMBERED_STEP.as_ref().ok()?;
    regex
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|step| step.as_str().trim().to_string())
}
