//! Plain text extraction for uploaded transcripts.
//!
//! Dispatch happens on the filename suffix only; the content is never sniffed.

use ec_core::{Error, Result};

pub mod pdf;
pub mod text;

pub const UNSUPPORTED_FORMAT: &str =
    "Unsupported file format. Please upload a PDF or TXT document.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Case-insensitive suffix match on `.pdf` / `.txt`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }
}

/// Extract the text content of `bytes`, picking the decoder from `filename`.
///
/// An empty string is a valid result; callers decide whether that is an error.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String> {
    let format = DocumentFormat::from_filename(filename)
        .ok_or_else(|| Error::UnsupportedFormat(UNSUPPORTED_FORMAT.to_string()))?;

    tracing::debug!(filename, ?format, size = bytes.len(), "extracting text");
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
        DocumentFormat::Text => text::decode_text(bytes)?,
    };
    tracing::debug!(filename, chars = text.chars().count(), "extraction finished");

    Ok(text)
}

pub mod prelude {
    pub use super::{extract_text, DocumentFormat};
    pub use ec_core::{Error, Result};
}
