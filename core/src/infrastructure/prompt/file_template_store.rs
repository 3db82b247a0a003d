use std::path::PathBuf;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::PromptTemplateStore, value_objects::RecipeTemplate},
};

/// Reads the recipe template from disk on every request, so edits to the
/// file apply without a restart.
#[derive(Debug, Clone)]
pub struct FilePromptTemplateStore {
    path: PathBuf,
}

impl FilePromptTemplateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PromptTemplateStore for FilePromptTemplateStore {
    async fn load_recipe_template(&self) -> Result<RecipeTemplate, CoreError> {
        let template = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!(
                "Error reading recipe prompt file at {}: {}",
                self.path.display(),
                e
            );
            CoreError::TemplateUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(RecipeTemplate::new(template))
    }
}
