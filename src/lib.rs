// Library root for the response envelope API

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::models::{ApiResponse, EncodingError, Envelope, ErrorResponse, SuccessResponse};
pub use crate::utils::response_handler::{HandlerResponse, Reply};
