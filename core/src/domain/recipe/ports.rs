use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{ChatMessage, RecipeTemplate, SamplingParams},
};

/// Text model that writes the recipes.
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerationClient: Send + Sync {
    fn generate(
        &self,
        messages: Vec<ChatMessage>,
        params: SamplingParams,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromptTemplateStore: Send + Sync {
    /// Fails with [`CoreError::TemplateUnavailable`] when the template
    /// cannot be read.
    fn load_recipe_template(
        &self,
    ) -> impl Future<Output = Result<RecipeTemplate, CoreError>> + Send;
}
