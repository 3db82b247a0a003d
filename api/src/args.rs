use std::path::PathBuf;

use chefai_core::domain::common::{ChefConfig, DetectionConfig, LLMConfig, StorageConfig};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "chefai", version, about = "Snap your fridge, get recipes")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAIArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub detection: DetectionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/chefai`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OpenAIArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-vision-model", env = "OPENAI_VISION_MODEL", default_value = "gpt-4o")]
    pub vision_model: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub text_model: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct StorageArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    #[arg(
        long = "recipe-prompt-path",
        env = "RECIPE_PROMPT_PATH",
        default_value = "prompts/recipe_prompt.txt"
    )]
    pub recipe_prompt_path: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DetectionArgs {
    #[arg(
        long = "confidence-threshold",
        env = "CONFIDENCE_THRESHOLD",
        default_value_t = 0.4,
        value_parser = parse_threshold
    )]
    pub confidence_threshold: f64,

    #[arg(long = "max-suggestions", env = "MAX_SUGGESTIONS", default_value_t = 10)]
    pub max_suggestions: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "chefai_api=info,chefai_core=info,tower_http=info"
    )]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,

    /// Shorthand for `--log-format json`
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogArgs {
    pub fn use_json(&self) -> bool {
        self.json || self.format == LogFormat::Json
    }
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;

    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("`{value}` is outside 0.0..=1.0"))
    }
}

impl From<Args> for ChefConfig {
    fn from(args: Args) -> Self {
        ChefConfig {
            llm: LLMConfig {
                api_key: args.openai.api_key,
                base_url: args.openai.base_url,
                vision_model: args.openai.vision_model,
                text_model: args.openai.text_model,
            },
            storage: StorageConfig {
                upload_dir: args.storage.upload_dir,
                recipe_prompt_path: args.storage.recipe_prompt_path,
            },
            detection: DetectionConfig {
                confidence_threshold: args.detection.confidence_threshold,
                max_suggestions: args.detection.max_suggestions,
            },
        }
    }
}
