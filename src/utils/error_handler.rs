// Global error handling for HTTP middleware layers

use axum::{http::StatusCode, BoxError};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

use crate::models::ErrorResponse;
use crate::utils::response_handler::Reply;
use crate::utils::utils::status_reason;

/// Maps layer errors to error envelopes with the matching HTTP status
pub async fn handle_global_error(err: BoxError) -> Reply<ErrorResponse> {
    let status_code: StatusCode = status_for(&err);

    warn!("Request failed in middleware with {}: {}", status_code, err);

    Reply::new(
        status_code,
        ErrorResponse::new(status_reason(status_code)).with_message(err.to_string()),
    )
}

// Oversized bodies never reach this handler: DefaultBodyLimit makes the body
// extractor reject the request with a plain 413, which envelope_wrapper turns
// into a PAYLOAD_TOO_LARGE error envelope.
fn status_for(err: &BoxError) -> StatusCode {
    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}
