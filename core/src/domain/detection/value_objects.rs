use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;

/// Inline image sent to the vision model.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub media_type: String,
    pub data: String, // base64
}

impl ImagePayload {
    pub fn encode(media_type: &str, image_data: &[u8]) -> Self {
        Self {
            media_type: media_type.to_string(),
            data: general_purpose::STANDARD.encode(image_data),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub detail: ImageDetail,
}

impl Default for VisionParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 1200,
            detail: ImageDetail::High,
        }
    }
}
