use std::sync::Arc;

use ec_core::AnalysisModel;

/// Default cap on the request body for uploads.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub struct AppState {
    pub analysis_model: Arc<dyn AnalysisModel>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(analysis_model: Arc<dyn AnalysisModel>) -> Self {
        Self {
            analysis_model,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
