//! The fallback handler for requests that do not match any route.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::endpoints::AVAILABLE_ENDPOINTS;

#[derive(Debug, Serialize)]
struct NotFoundBody {
    error: &'static str,
    available_endpoints: &'static [&'static str],
}

/// A route handler for any path without a route of its own.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Endpoint not found",
            available_endpoints: AVAILABLE_ENDPOINTS,
        }),
    )
        .into_response()
}
