use crate::domain::{
    common::DetectionConfig,
    detection::ports::VisionClient,
    recipe::ports::{PromptTemplateStore, TextGenerationClient},
    upload::ports::UploadStore,
};

/// Holds every collaborator the core talks to. Feature services are
/// implemented on this type in their own modules.
#[derive(Clone)]
pub struct Service<V, T, P, U>
where
    V: VisionClient,
    T: TextGenerationClient,
    P: PromptTemplateStore,
    U: UploadStore,
{
    pub vision_client: V,
    pub text_client: T,
    pub template_store: P,
    pub upload_store: U,
    pub detection_config: DetectionConfig,
}

impl<V, T, P, U> Service<V, T, P, U>
where
    V: VisionClient,
    T: TextGenerationClient,
    P: PromptTemplateStore,
    U: UploadStore,
{
    pub fn new(
        vision_client: V,
        text_client: T,
        template_store: P,
        upload_store: U,
        detection_config: DetectionConfig,
    ) -> Self {
        Self {
            vision_client,
            text_client,
            template_store,
            upload_store,
            detection_config,
        }
    }
}
