// Envelope replies for handlers plus the middleware that guarantees every
// response leaves the server as one of the JSON envelopes

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        response::Parts,
        HeaderValue, Response, StatusCode,
    },
    middleware::Next,
    response::IntoResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::{debug, error};

use crate::models::{ApiResponse, Envelope, ErrorResponse, SuccessResponse};
use crate::utils::utils::status_reason;

/// Marker stored in response extensions once the body is an envelope
#[derive(Debug, Clone, Copy)]
pub struct Enveloped;

/// Pairs an envelope with the HTTP status it is sent under
#[derive(Debug, Clone)]
pub struct Reply<E> {
    pub status_code: StatusCode,
    pub envelope: E,
}

impl<E: Envelope> Reply<E> {
    pub fn new(status_code: StatusCode, envelope: E) -> Self {
        Self {
            status_code,
            envelope,
        }
    }
}

impl<E: Envelope> IntoResponse for Reply<E> {
    fn into_response(self) -> Response<Body> {
        match self.envelope.encode() {
            Ok(body) => {
                log_envelope(&self.envelope);
                build_envelope_response(self.status_code, body)
            }
            Err(err) => {
                error!("Failed to encode {} reply: {}", self.status_code, err);

                build_envelope_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"error":"encoding_error"}"#.to_vec(),
                )
            }
        }
    }
}

/// Convenience builder for handlers answering with the generic envelope
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub envelope: ApiResponse,
}

impl HandlerResponse {
    /// Creates a new response; `success` follows the status class
    pub fn new(status_code: StatusCode) -> Self {
        let envelope: ApiResponse = ApiResponse {
            success: status_code.is_success(),
            ..ApiResponse::ok()
        };

        Self {
            status_code,
            envelope,
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.envelope = self.envelope.with_data(data);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.envelope = self.envelope.with_message(message);
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.envelope = self.envelope.with_error(error);
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response<Body> {
        Reply::new(self.status_code, self.envelope).into_response()
    }
}

fn build_envelope_response(status_code: StatusCode, body: Vec<u8>) -> Response<Body> {
    let mut response: Response<Body> = Response::new(Body::from(body));

    *response.status_mut() = status_code;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response.extensions_mut().insert(Enveloped);

    response
}

/// Logs the final envelope with proper JSON indentation
fn log_envelope<E: Envelope>(envelope: &E) {
    match envelope.encode_pretty() {
        Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Statuses that must not carry a body
fn is_bodiless(status: StatusCode) -> bool {
    status.is_informational() || status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED
}

/// Builds the envelope for a response produced outside our handlers
/// (extractor rejections, framework errors, raw JSON handlers)
fn envelope_for(status: StatusCode, body: &Bytes) -> Response<Body> {
    let reason: String = status_reason(status);

    if status.is_success() {
        let data: Option<Value> = if body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice::<Value>(body)
                    .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned())),
            )
        };

        let envelope: SuccessResponse = SuccessResponse::new(reason).with_data(data.unwrap_or(Value::Null));
        return Reply::new(status, envelope).into_response();
    }

    let text: String = String::from_utf8_lossy(body).trim().to_string();
    Reply::new(status, ErrorResponse::new(reason).with_message(text)).into_response()
}

/// Keeps the original headers, swapping in the envelope body
fn rewrap(mut parts: Parts, enveloped: Response<Body>) -> Response<Body> {
    let (new_parts, new_body) = enveloped.into_parts();

    parts.status = new_parts.status;
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.extensions.insert(Enveloped);

    Response::from_parts(parts, new_body)
}

/// Middleware that wraps every non-enveloped response in an envelope
pub async fn envelope_wrapper(req: Request, next: Next) -> Response<Body> {
    let response: Response<Body> = next.run(req).await;

    if response.extensions().get::<Enveloped>().is_some() || is_bodiless(response.status()) {
        return response;
    }

    let (parts, body) = response.into_parts();

    // * A body that breaks mid-stream is a server failure, whatever the status said
    let bytes: Bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            error!("Failed to read {} response body for wrapping: {}", parts.status, err);

            let status_code: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
            let failure: ErrorResponse = ErrorResponse::new(status_reason(status_code)).with_message(err.to_string());
            return rewrap(parts, Reply::new(status_code, failure).into_response());
        }
    };

    let enveloped: Response<Body> = envelope_for(parts.status, &bytes);
    rewrap(parts, enveloped)
}
