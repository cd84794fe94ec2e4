use std::fmt;

pub mod models;
pub mod prompts;
pub mod schema;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash";

/// Connection settings for the model provider, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model_name: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::Config;
    pub use ec_core::{AnalysisModel, EarningsCallSummary, Error, Result};
}

pub use models::create_model;
