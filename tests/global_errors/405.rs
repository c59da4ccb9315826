//! tests/global_errors/405.rs
//! Framework-generated responses without a body still get an error envelope.

use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_405_envelope_for_wrong_method() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/status", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    // The Allow header survives the wrapping.
    assert!(resp.headers().contains_key("allow"));

    let body: String = resp.text().await.unwrap();
    assert_eq!(body, r#"{"error":"METHOD_NOT_ALLOWED"}"#);
}
