use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use ec_core::{Document, EarningsCallSummary, Error, Result};
use ec_extract::DocumentFormat;
use serde_json::{json, Value};

use crate::pipeline::summarize_document;
use crate::{ApiError, AppState};

pub const UPLOAD_FIELD: &str = "file";
pub const UNSUPPORTED_UPLOAD: &str = "Only .pdf and .txt files are supported";

pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> std::result::Result<Json<EarningsCallSummary>, ApiError> {
    let document = read_upload(&mut multipart, state.max_upload_bytes).await?;
    tracing::info!(
        filename = %document.filename,
        size = document.bytes.len(),
        "📄 Received document"
    );

    let summary = summarize_document(state.analysis_model.as_ref(), document).await?;
    tracing::info!(model = state.analysis_model.name(), "✅ Analysis complete");
    Ok(Json(summary))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.analysis_model.name(),
    }))
}

/// Pull the `file` field out of the form. The filename is checked before the
/// field body is read.
async fn read_upload(multipart: &mut Multipart, max_upload_bytes: usize) -> Result<Document> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, "Invalid multipart upload", max_upload_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if DocumentFormat::from_filename(&filename).is_none() {
            return Err(Error::UnsupportedFormat(UNSUPPORTED_UPLOAD.to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, "Failed to read upload", max_upload_bytes))?;
        return Ok(Document::new(filename, bytes.to_vec()));
    }

    Err(Error::InvalidUpload("No file uploaded".to_string()))
}

/// Body-limit hits surface from multer as a generic parse error; axum tags
/// them with 413.
fn upload_error(err: MultipartError, context: &str, max_upload_bytes: usize) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::UploadTooLarge(max_upload_bytes)
    } else {
        Error::InvalidUpload(format!("{}: {}", context, err))
    }
}
