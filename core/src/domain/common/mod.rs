use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ChefConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
    pub detection: DetectionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: String,
    pub vision_model: String,
    pub text_model: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub recipe_prompt_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct DetectionConfig {
    pub confidence_threshold: f64,
    /// Number of ranked suggestions handed to the picker.
    pub max_suggestions: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: crate::domain::detection::DEFAULT_CONFIDENCE_THRESHOLD,
            max_suggestions: 10,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
