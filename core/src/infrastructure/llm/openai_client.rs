use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    detection::{
        ports::VisionClient,
        value_objects::{ImageDetail, ImagePayload, VisionParams},
    },
    recipe::{
        ports::TextGenerationClient,
        value_objects::{ChatMessage, ChatRole, SamplingParams},
    },
};

/// Client for any OpenAI-compatible chat completions endpoint. Serves both
/// the vision model and the text model.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    vision_model: String,
    text_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<RequestMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: ChatRole,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: ImageDetail,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAIClient {
    pub fn new(
        api_key: String,
        base_url: String,
        vision_model: String,
        text_model: String,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            vision_model,
            text_model,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.vision_model.clone(),
            config.text_model.clone(),
        )
    }

    async fn call_chat_api(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Calling chat completions with model {}", request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        // Null content, e.g. a refusal, is an empty reply
        Ok(choice.message.content.unwrap_or_else(|| {
            tracing::warn!("LLM returned a choice without content");
            String::new()
        }))
    }
}

impl VisionClient for OpenAIClient {
    async fn describe_image(
        &self,
        instruction: String,
        image: ImagePayload,
        params: VisionParams,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.vision_model.clone(),
            messages: vec![RequestMessage {
                role: ChatRole::User,
                content: MessageContent::Parts(vec![
                    ContentPart::Text { text: instruction },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                            detail: params.detail,
                        },
                    },
                ]),
            }],
            temperature: params.temperature,
            top_p: None,
            max_tokens: params.max_tokens,
        };

        self.call_chat_api(request).await
    }
}

impl TextGenerationClient for OpenAIClient {
    async fn generate(
        &self,
        messages: Vec<ChatMessage>,
        params: SamplingParams,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.text_model.clone(),
            messages: messages
                .into_iter()
                .map(|message| RequestMessage {
                    role: message.role,
                    content: MessageContent::Text(message.content),
                })
                .collect(),
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        };

        self.call_chat_api(request).await
    }
}
