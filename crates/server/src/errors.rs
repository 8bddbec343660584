use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use drive_client::SourceError;
use index_store::StoreError;

/// Request-scoped failures. A failing request never affects any other
/// request or the process itself.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl GatewayError {
    /// Returns the appropriate HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400, // Bad Request
            // The remote status is surfaced verbatim, e.g. a not-found
            // export stays a 404 instead of becoming a generic 500.
            GatewayError::Source(SourceError::Http { status, .. }) => *status,
            GatewayError::Source(SourceError::Transport(_)) => 502, // Bad Gateway
            GatewayError::Source(SourceError::Decode(_)) => 500,    // Internal Server Error
            GatewayError::Storage(_) => 500,                        // Internal Server Error
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
