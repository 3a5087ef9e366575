//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of bytes of a request or response body that are logged at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = match extract_request_parts_and_body_text(request).await {
        Ok(parts_and_body) => parts_and_body,
        Err(error) => return error.into_response(),
    };
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, Body::from(body_text));
    let response = next.run(request).await;

    let (parts, body_text) = match extract_response_parts_and_body_text(response).await {
        Ok(parts_and_body) => parts_and_body,
        Err(error) => return error.into_response(),
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, Body::from(body_text))
}

async fn extract_request_parts_and_body_text(
    request: Request,
) -> Result<(request::Parts, String), Error> {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| Error::Io(error.to_string()))?;

    Ok((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

async fn extract_response_parts_and_body_text(
    response: Response,
) -> Result<(response::Parts, String), Error> {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| Error::Io(error.to_string()))?;

    Ok((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `body`, cut back to the
/// nearest character boundary.
fn truncate_body(body: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(body.len());

    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}
