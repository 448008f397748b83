//! Request-level errors for the webhook endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Both variants end the request with a 400 and leave the metrics untouched.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("{0}")]
    BodyRead(String),
    #[error("Invalid payload")]
    PayloadDecode(#[source] serde_json::Error),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
