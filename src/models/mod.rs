// Start of file: /src/models/mod.rs

/*
    * This module groups the wire-level data models: the three response
    * envelopes and the error raised while (de)serializing them.
*/

pub mod envelope;
pub mod error;

pub use envelope::{ApiResponse, Envelope, ErrorResponse, SuccessResponse};
pub use error::EncodingError;

// End of file: /src/models/mod.rs
