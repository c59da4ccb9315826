//! tests/endpoints/status.rs
//! The status endpoint answers with a success envelope carrying health data.

use reqwest::StatusCode;
use response_envelope_api::{Envelope, SuccessResponse};
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn status_returns_success_envelope() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/status", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");

    let body: Vec<u8> = resp.bytes().await.unwrap().to_vec();
    let envelope: SuccessResponse = SuccessResponse::decode(&body).unwrap();

    assert_eq!(envelope.message, "API is running successfully");

    let data: Value = envelope.data.expect("status carries data");
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["environment"], "test");
    assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
}
