use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to decode TXT file: {0}")]
    Decode(String),

    #[error("Could not extract any text from the document.")]
    EmptyDocument,

    #[error("{0}")]
    InvalidUpload(String),

    #[error("File exceeds the {} upload limit", format_size(.0))]
    UploadTooLarge(usize),

    #[error("Failed to analyze transcript with LLM: {0}")]
    Analysis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures caused by the uploaded document itself rather than
    /// by the server or the model provider.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat(_)
                | Error::Pdf(_)
                | Error::Decode(_)
                | Error::EmptyDocument
                | Error::InvalidUpload(_)
                | Error::UploadTooLarge(_)
        )
    }
}

fn format_size(bytes: &usize) -> String {
    let bytes = *bytes;
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
