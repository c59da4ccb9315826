// System handlers; each one answers with one of the envelope shapes

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::models::{ErrorResponse, SuccessResponse};
use crate::utils::response_handler::{HandlerResponse, Reply};
use crate::utils::utils::status_reason;

/// Returns API status and health information
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> Reply<SuccessResponse> {
    info!("Status endpoint called");

    Reply::new(
        StatusCode::OK,
        SuccessResponse::new("API is running successfully").with_data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment.clone(),
        })),
    )
}

/// Sends back whatever JSON value it receives as the envelope payload
#[instrument(skip(payload))]
pub async fn echo_handler(Json(payload): Json<Value>) -> Reply<SuccessResponse> {
    info!("Echoing payload");

    Reply::new(StatusCode::OK, SuccessResponse::new("echo").with_data(payload))
}

/// Endpoint that sleeps longer than timeout to test timeout middleware
#[instrument(skip(state))]
pub async fn timeout_test_handler(State(state): State<AppState>) -> HandlerResponse {
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;

    info!(
        "Testing timeout: sleeping for {} seconds (timeout is set to {} seconds)",
        timeout_seconds + 2,
        timeout_seconds
    );

    tokio::time::sleep(std::time::Duration::from_secs(timeout_seconds + 2)).await;

    // Only reached when the timeout layer is missing
    HandlerResponse::new(StatusCode::OK).message("Timeout test completed (this shouldn't happen)")
}

/// Returns a 500 generic envelope to test error replies
#[instrument]
pub async fn error_test_handler() -> HandlerResponse {
    info!("Testing deliberate 500 error");

    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
        .error("deliberate_test_error")
        .message("Deliberate 500 error for testing purposes")
}

/// Answers unknown routes with a 404 error envelope
pub async fn fallback_handler(uri: Uri) -> Reply<ErrorResponse> {
    info!("No route matches {}", uri.path());

    Reply::new(
        StatusCode::NOT_FOUND,
        ErrorResponse::new(status_reason(StatusCode::NOT_FOUND))
            .with_message(format!("The requested route {} does not exist", uri.path())),
    )
}
