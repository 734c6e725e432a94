//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, internal_server_error::InternalServerError};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Request bodies are buffered up to [MAX_BODY_BYTES]. A request that declares
/// a larger `Content-Length` is rejected with 413 before its body is read.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    if content_length(&parts.headers).is_some_and(|length| length > MAX_BODY_BYTES) {
        tracing::warn!(
            "rejected {} {}: body exceeds {MAX_BODY_BYTES} bytes",
            parts.method,
            parts.uri
        );
        return Error::PayloadTooLarge(MAX_BODY_BYTES).into_response();
    }

    let body_text = match body_to_text(body, MAX_BODY_BYTES).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!("could not read request body: {error}");
            return Error::RequestBody(error).into_response();
        }
    };
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    // Response bodies are produced by this server and are already in memory.
    let (parts, body) = response.into_parts();
    let body_text = match body_to_text(body, usize::MAX).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return InternalServerError::default().into_response();
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

/// The largest request body the server will buffer, in bytes.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

async fn body_to_text(body: Body, limit: usize) -> Result<String, String> {
    let body_bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|error| error.to_string())?;

    Ok(String::from_utf8_lossy(&body_bytes).to_string())
}

/// The number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The longest prefix of `body` that fits in [LOG_BODY_LENGTH_LIMIT] bytes
/// without splitting a character.
fn truncate_body(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
