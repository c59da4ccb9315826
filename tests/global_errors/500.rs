//! tests/global_errors/500.rs
//! Ensures that an internal error answers 500 with a failed generic envelope.

use reqwest::StatusCode;
use response_envelope_api::{ApiResponse, Envelope};

use crate::common;

#[tokio::test]
async fn returns_500_on_internal_error() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/error", base_url))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: String = resp.text().await.unwrap();
    assert_eq!(
        body,
        r#"{"success":false,"message":"Deliberate 500 error for testing purposes","error":"deliberate_test_error"}"#
    );

    let envelope: ApiResponse = ApiResponse::decode(body.as_bytes()).unwrap();
    assert_eq!(envelope.into_result(), Err("deliberate_test_error".to_string()));
}
