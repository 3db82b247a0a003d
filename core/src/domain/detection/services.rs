use std::future::Future;

use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::{
        entities::DetectionOutcome,
        filter::filter_by_confidence,
        normalizer::parse_vision_response,
        ports::VisionClient,
        schema::get_detection_instruction,
        value_objects::{ImagePayload, VisionParams},
    },
    ingredient::ranker::suggest_ingredients,
    recipe::ports::{PromptTemplateStore, TextGenerationClient},
    upload::{ports::UploadStore, value_objects::UploadImageInput},
};

/// Service trait for grocery detection
#[cfg_attr(test, mockall::automock)]
pub trait DetectionService: Send + Sync {
    /// Stage an uploaded photo, ask the vision model what it sees and rank
    /// the result into ingredient suggestions.
    ///
    /// A reply without usable JSON is not an error: it yields an empty
    /// outcome. Failing to read the image or to reach the model is.
    fn detect_ingredients(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<DetectionOutcome, CoreError>> + Send;
}

impl<V, T, P, U> DetectionService for Service<V, T, P, U>
where
    V: VisionClient,
    T: TextGenerationClient,
    P: PromptTemplateStore,
    U: UploadStore,
{
    #[instrument(skip(self, input), fields(file_name = %input.file_name, size_bytes = input.data.len()))]
    async fn detect_ingredients(
        &self,
        input: UploadImageInput,
    ) -> Result<DetectionOutcome, CoreError> {
        // 1. Stage the upload and read it back
        let staged = self.upload_store.stage(input).await?;
        let image_data = self.upload_store.read(staged.path.clone()).await?;

        // 2. Ask the vision model
        let image = ImagePayload::encode(&staged.media_type, &image_data);
        info!(
            path = %staged.path.display(),
            media_type = %staged.media_type,
            "Analyzing image with vision model"
        );

        let raw_response = self
            .vision_client
            .describe_image(get_detection_instruction(), image, VisionParams::default())
            .await?;
        debug!("Raw vision response: {}", raw_response);

        // 3. Normalize, filter and rank
        let threshold = self.detection_config.confidence_threshold;
        let detections = filter_by_confidence(parse_vision_response(&raw_response), threshold);
        info!(
            "Detected {} items above confidence threshold {}",
            detections.len(),
            threshold
        );

        let mut suggestions = suggest_ingredients(&detections);
        suggestions.truncate(self.detection_config.max_suggestions);

        info!(
            "Detected {} objects, suggested {} ingredients",
            detections.len(),
            suggestions.len()
        );

        Ok(DetectionOutcome {
            detections,
            suggestions,
        })
    }
}
