//! tests/global_errors/413.rs
//! Ensures that sending a payload above the body limit triggers 413. The
//! rejection comes from the Json extractor and is enveloped by the wrapper.

use reqwest::StatusCode;
use response_envelope_api::{Envelope, ErrorResponse};

use crate::common;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app();

    // A JSON string well past the test body limit.
    let oversized_payload: String = format!("\"{}\"", "X".repeat(common::TEST_BODY_LIMIT * 8));

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .header("content-type", "application/json")
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Vec<u8> = resp.bytes().await.unwrap().to_vec();
    let envelope: ErrorResponse = ErrorResponse::decode(&body).unwrap();
    assert_eq!(envelope.error, "PAYLOAD_TOO_LARGE");
    assert!(envelope.message.is_some());
}
