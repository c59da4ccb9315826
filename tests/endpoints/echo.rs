//! tests/endpoints/echo.rs
//! Any JSON value posted to /echo comes back unchanged as the envelope payload.

use reqwest::StatusCode;
use response_envelope_api::{Envelope, ErrorResponse, SuccessResponse};
use serde_json::{json, Value};

use crate::common;

async fn echo(base_url: &str, payload: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .json(payload)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn echo_wraps_object_payload_exactly() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = echo(&base_url, &json!({ "id": 42 })).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), r#"{"message":"echo","data":{"id":42}}"#);
}

#[tokio::test]
async fn echo_round_trips_every_json_kind() {
    let base_url: String = common::spawn_app();

    let payloads: Vec<Value> = vec![
        json!({ "elements": [{ "x": 1.5, "label": "box" }], "relationships": [] }),
        json!([1, "two", [3], { "four": 4 }]),
        json!(12345),
        json!("plain text"),
        json!(false),
    ];

    for payload in payloads {
        let resp: reqwest::Response = echo(&base_url, &payload).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Vec<u8> = resp.bytes().await.unwrap().to_vec();
        let envelope: SuccessResponse = SuccessResponse::decode(&body).unwrap();

        assert_eq!(envelope.message, "echo");
        assert_eq!(envelope.data, Some(payload));
    }
}

#[tokio::test]
async fn echo_of_null_omits_data() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = echo(&base_url, &Value::Null).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), r#"{"message":"echo"}"#);
}

#[tokio::test]
async fn malformed_json_becomes_error_envelope() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .header("content-type", "application/json")
        .body("{\"id\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Vec<u8> = resp.bytes().await.unwrap().to_vec();
    let envelope: ErrorResponse = ErrorResponse::decode(&body).unwrap();

    assert_eq!(envelope.error, "BAD_REQUEST");
    assert!(envelope.message.is_some());
}

#[tokio::test]
async fn missing_content_type_becomes_error_envelope() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .body("{}")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body: Vec<u8> = resp.bytes().await.unwrap().to_vec();
    let envelope: ErrorResponse = ErrorResponse::decode(&body).unwrap();

    assert_eq!(envelope.error, "UNSUPPORTED_MEDIA_TYPE");
}
