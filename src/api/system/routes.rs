// System route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the system endpoints
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handler::status_handler))
        .route("/echo", post(handler::echo_handler))
        // Sleeps past the configured timeout
        .route("/timeout", get(handler::timeout_test_handler))
        .route("/error", get(handler::error_test_handler))
}
