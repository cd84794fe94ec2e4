use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ec_core::Error;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Converts pipeline errors into `{"detail": ...}` responses. Document
/// problems are the caller's fault (400, or 413 past the upload limit);
/// everything else is ours (500).
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = if matches!(self.0, Error::UploadTooLarge(_)) {
            (StatusCode::PAYLOAD_TOO_LARGE, self.0.to_string())
        } else if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {}", self.0),
            )
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %detail, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %detail, "request rejected");
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
