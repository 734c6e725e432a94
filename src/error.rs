//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::internal_server_error::InternalServerError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to create a transaction did not include all of the
    /// description, amount and type.
    ///
    /// Empty strings count as missing.
    #[error("Missing required fields: description, amount, type")]
    MissingFields,

    /// The transaction type was something other than "income" or "expense".
    #[error("Type must be \"income\" or \"expense\"")]
    InvalidKind(String),

    /// The amount could not be read as a finite number.
    #[error("Amount must be a number")]
    InvalidAmount(String),

    /// The request body could not be parsed as the expected JSON.
    ///
    /// The string holds the reason given by the JSON extractor.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// The request body could not be read.
    #[error("could not read request body: {0}")]
    RequestBody(String),

    /// The request body is larger than the server accepts.
    ///
    /// The value is the limit in bytes.
    #[error("Request body must not exceed {0} bytes")]
    PayloadTooLarge(usize),

    /// Could not acquire the ledger lock.
    ///
    /// This only happens if a thread panicked while holding the lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// An error occurred while registering, recording or encoding metrics.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("metrics error: {0}")]
    MetricsError(String),
}

impl From<prometheus::Error> for Error {
    fn from(value: prometheus::Error) -> Self {
        Error::MetricsError(value.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::InvalidJson(value.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingFields
            | Error::InvalidKind(_)
            | Error::InvalidAmount(_)
            | Error::InvalidJson(_)
            | Error::RequestBody(_) => {
                tracing::debug!("rejected request: {self:?}");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            Error::PayloadTooLarge(_) => {
                tracing::debug!("rejected request: {self:?}");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            Error::MetricsError(error) => {
                tracing::error!("could not get metrics: {error}");
                InternalServerError {
                    error: "Failed to get metrics",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use crate::test_utils::into_json;

    use super::Error;

    async fn into_status_and_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();

        (status, into_json(response).await)
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let (status, body) = into_status_and_json(Error::MissingFields).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Missing required fields: description, amount, type" })
        );
    }

    #[tokio::test]
    async fn invalid_kind_does_not_echo_input() {
        let (status, body) = into_status_and_json(Error::InvalidKind("<script>".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Type must be \"income\" or \"expense\"" }));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let (status, body) = into_status_and_json(Error::PayloadTooLarge(1024)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body,
            json!({ "error": "Request body must not exceed 1024 bytes" })
        );
    }

    #[tokio::test]
    async fn metrics_error_hides_details() {
        let (status, body) =
            into_status_and_json(Error::MetricsError("duplicate metrics".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to get metrics" }));
    }

    #[tokio::test]
    async fn lock_error_is_internal_server_error() {
        let (status, body) = into_status_and_json(Error::LedgerLockError).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
