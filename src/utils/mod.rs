// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules like error handling,
    * envelope replies, middleware wrappers, shared utilities, etc.
*/

pub mod error_handler;
pub mod response_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
