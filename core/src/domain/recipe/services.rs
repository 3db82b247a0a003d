use std::future::Future;

use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::ports::VisionClient,
    recipe::{
        entities::{CHEF_SYSTEM_PROMPT, Mood, RecipeText},
        ports::{PromptTemplateStore, TextGenerationClient},
        value_objects::{ChatMessage, SamplingParams},
    },
    upload::ports::UploadStore,
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Writes two recipes from the given ingredients in the requested mood.
    ///
    /// Only a missing prompt template or an empty ingredient list is an
    /// `Err`. A failing text model yields [`RecipeText::Failed`].
    fn generate_recipes(
        &self,
        ingredients: Vec<String>,
        mood: Mood,
    ) -> impl Future<Output = Result<RecipeText, CoreError>> + Send;
}

impl<V, T, P, U> RecipeService for Service<V, T, P, U>
where
    V: VisionClient,
    T: TextGenerationClient,
    P: PromptTemplateStore,
    U: UploadStore,
{
    #[instrument(skip(self), fields(ingredient_count = ingredients.len()))]
    async fn generate_recipes(
        &self,
        ingredients: Vec<String>,
        mood: Mood,
    ) -> Result<RecipeText, CoreError> {
        if ingredients.is_empty() {
            return Err(CoreError::Invalid);
        }

        let template = self.template_store.load_recipe_template().await?;
        let prompt = template.render(&ingredients, mood.label());
        debug!("Recipe prompt: {}", prompt);

        info!("Generating recipes");
        let messages = vec![
            ChatMessage::system(CHEF_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        match self
            .text_client
            .generate(messages, SamplingParams::recipe())
            .await
        {
            Ok(reply) => {
                info!("Generated recipes ({} characters)", reply.len());
                Ok(RecipeText::generated(&reply))
            }
            Err(e) => {
                error!("Error generating recipes: {}", e);
                Ok(RecipeText::failed(e))
            }
        }
    }
}
