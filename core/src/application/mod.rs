use crate::{
    domain::common::{ChefConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::openai_client::OpenAIClient, prompt::file_template_store::FilePromptTemplateStore,
        upload::local_store::LocalUploadStore,
    },
};

/// The service wired with the production adapters. One OpenAI client serves
/// both the vision and the text port.
pub type ChefService =
    Service<OpenAIClient, OpenAIClient, FilePromptTemplateStore, LocalUploadStore>;

pub fn create_service(config: ChefConfig) -> Result<ChefService, CoreError> {
    if config.llm.api_key.trim().is_empty() {
        tracing::error!("OPENAI_API_KEY is empty");
        return Err(CoreError::Invalid);
    }

    let llm_client = OpenAIClient::from_config(&config.llm);

    Ok(Service::new(
        llm_client.clone(),
        llm_client,
        FilePromptTemplateStore::new(config.storage.recipe_prompt_path),
        LocalUploadStore::new(config.storage.upload_dir),
        config.detection,
    ))
}
