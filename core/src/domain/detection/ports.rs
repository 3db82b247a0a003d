use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::value_objects::{ImagePayload, VisionParams},
};

/// Vision model that looks at a photo and answers in free-form text
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn describe_image(
        &self,
        instruction: String,
        image: ImagePayload,
        params: VisionParams,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
