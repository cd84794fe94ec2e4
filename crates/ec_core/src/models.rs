use std::fmt;

use async_trait::async_trait;

use crate::types::EarningsCallSummary;
use crate::Result;

#[async_trait]
pub trait AnalysisModel: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and the health endpoint
    fn name(&self) -> &str;

    /// Produce a structured earnings call summary from transcript text
    async fn analyze(&self, transcript: &str) -> Result<EarningsCallSummary>;
}
