use ec_core::{AnalysisModel, Document, EarningsCallSummary, Error, Result};

/// Run one document through extraction and analysis.
///
/// Parsing runs on the blocking pool; text that trims to nothing is rejected
/// before the model is called.
pub async fn summarize_document(
    model: &dyn AnalysisModel,
    document: Document,
) -> Result<EarningsCallSummary> {
    let text = tokio::task::spawn_blocking(move || {
        ec_extract::extract_text(&document.bytes, &document.filename)
    })
    .await
    .map_err(|e| Error::External(anyhow::anyhow!("extraction task failed: {}", e)))??;

    if text.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    model.analyze(&text).await
}
