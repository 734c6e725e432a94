//! Defines the response to send when an internal server error occurs.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// A 500 response with a generic message.
///
/// Details of the underlying error belong in the server logs, not here.
pub struct InternalServerError<'a> {
    pub error: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            error: "Internal server error",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.error })),
        )
            .into_response()
    }
}
