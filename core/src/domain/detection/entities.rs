use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One grocery item reported by the vision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub name: String,
    pub confidence: f64, // 0.0-1.0
    pub category: String,
    pub description: String,
}

impl Detection {
    pub fn new(
        name: impl Into<String>,
        confidence: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            confidence,
            category: category.into(),
            description: description.into(),
        }
    }
}

/// What a detection run hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionOutcome {
    pub detections: Vec<Detection>,
    pub suggestions: Vec<String>,
}
