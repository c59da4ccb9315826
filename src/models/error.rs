// Errors raised while turning envelopes into bytes and back

/// Failure to represent an envelope (or its payload) as JSON.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("Failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode envelope: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Payload is not representable as JSON: {0}")]
    Payload(#[source] serde_json::Error),
}
