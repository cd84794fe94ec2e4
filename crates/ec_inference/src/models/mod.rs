use std::sync::Arc;

use ec_core::{Error, Result};

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use ec_core::AnalysisModel;
pub use openai::OpenAiModel;

/// Build the analysis model selected by `name` ("openai" or "dummy").
pub fn create_model(name: &str, config: &Config) -> Result<Arc<dyn AnalysisModel>> {
    let model: Arc<dyn AnalysisModel> = match name.to_lowercase().as_str() {
        "openai" => Arc::new(OpenAiModel::new(config)?),
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Config(format!(
                "Unknown model '{}'. Available models: openai, dummy",
                other
            )))
        }
    };
    tracing::info!(model = model.name(), model_name = %config.model_name, "analysis model ready");
    Ok(model)
}
