use asset_viewer_core::ViewerError;
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failure of a request handler, reported as a JSON `500`.
///
/// A failed scan only fails the current request; the next one scans again.
#[derive(Debug)]
pub enum HandlerError {
    Scan(ViewerError),
    Task(tokio::task::JoinError),
}

impl From<ViewerError> for HandlerError {
    fn from(err: ViewerError) -> Self {
        HandlerError::Scan(err)
    }
}

impl From<tokio::task::JoinError> for HandlerError {
    fn from(err: tokio::task::JoinError) -> Self {
        HandlerError::Task(err)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let message = match &self {
            HandlerError::Scan(e) => e.to_string(),
            HandlerError::Task(e) => format!("Scan task failed: {}", e),
        };
        error!("Asset scan failed: {}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, "no-store")],
            Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}
