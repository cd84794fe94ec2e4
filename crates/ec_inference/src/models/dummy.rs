use std::fmt;

use ec_core::{EarningsCallSummary, Result};

use super::AnalysisModel;

/// Offline model that never leaves the process. It copies the leading
/// sentences of the transcript into `key_positives` and reports every other
/// field as not mentioned.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalysisModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn analyze(&self, transcript: &str) -> Result<EarningsCallSummary> {
        let sentences: Vec<String> = transcript
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(3)
            .map(str::to_string)
            .collect();

        let mut summary = EarningsCallSummary::not_mentioned();
        if !sentences.is_empty() {
            summary.key_positives = sentences;
        }
        tracing::debug!(positives = summary.key_positives.len(), "dummy summary");
        Ok(summary)
    }
}
