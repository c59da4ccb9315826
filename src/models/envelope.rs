// Start of file: /src/models/envelope.rs

/*
    * Defines the three JSON envelopes every reply of the API is wrapped in:
    * a generic success/error envelope, a dedicated error envelope and a
    * dedicated success envelope.
    *
    * Optional fields are modelled as `Option`. On the wire they are omitted
    * when absent, and an empty string (or a JSON `null` payload) counts as
    * absent. Required fields are always emitted, zero values included.
*/

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::error::EncodingError;
use crate::utils::utils::to_two_space_indented_json;

/// Shared (de)serialization contract of all envelope shapes.
pub trait Envelope: Serialize + DeserializeOwned {
    /// Serializes the envelope into compact JSON bytes.
    fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        serde_json::to_vec(self).map_err(EncodingError::Encode)
    }

    /// Two-space indented rendering, used when logging replies.
    fn encode_pretty(&self) -> Result<String, EncodingError> {
        to_two_space_indented_json(self).map_err(EncodingError::Encode)
    }

    /// Parses an envelope from JSON bytes.
    ///
    /// Required keys (`success`, `error` or `message`, depending on the shape)
    /// must be present and non-null; a missing one is a `Decode` error rather
    /// than a silent zero value. Unknown keys are ignored.
    fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        serde_json::from_slice(bytes).map_err(EncodingError::Decode)
    }
}

// * Generic envelope: `success` always, the rest only when present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "is_blank", deserialize_with = "non_blank")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent", deserialize_with = "non_null")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "is_blank", deserialize_with = "non_blank")]
    pub error: Option<String>,
}

// * Error envelope: `error` always (even when empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "is_blank", deserialize_with = "non_blank")]
    pub message: Option<String>,
}

// * Success envelope: `message` always (even when empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "is_absent", deserialize_with = "non_null")]
    pub data: Option<Value>,
}

impl Envelope for ApiResponse {}
impl Envelope for ErrorResponse {}
impl Envelope for SuccessResponse {}

impl ApiResponse {
    /// A bare `{"success":true}` envelope.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
            error: None,
        }
    }

    /// A `{"success":false,"error":...}` envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: present(error.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = present(message.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = present(error.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = some_value(data);
        self
    }

    /// Attaches any serializable payload, failing when it has no JSON form.
    pub fn try_with_data<T: Serialize + ?Sized>(self, data: &T) -> Result<Self, EncodingError> {
        Ok(self.with_data(payload_from(data)?))
    }

    /// Reads the payload back as a concrete type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, EncodingError> {
        payload_as(self.data.as_ref())
    }

    /// Splits the envelope the way a client consumes it: the payload on
    /// success, the error text (or message) otherwise.
    pub fn into_result(self) -> Result<Option<Value>, String> {
        if self.success {
            return Ok(self.data);
        }

        Err(self.error.or(self.message).unwrap_or_default())
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = present(message.into());
        self
    }
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = some_value(data);
        self
    }

    /// Attaches any serializable payload, failing when it has no JSON form.
    pub fn try_with_data<T: Serialize + ?Sized>(self, data: &T) -> Result<Self, EncodingError> {
        Ok(self.with_data(payload_from(data)?))
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, EncodingError> {
        payload_as(self.data.as_ref())
    }
}

impl From<SuccessResponse> for ApiResponse {
    fn from(success: SuccessResponse) -> Self {
        Self {
            success: true,
            message: present(success.message),
            data: success.data,
            error: None,
        }
    }
}

impl From<ErrorResponse> for ApiResponse {
    fn from(failure: ErrorResponse) -> Self {
        Self {
            success: false,
            message: failure.message,
            data: None,
            error: present(failure.error),
        }
    }
}

fn present(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

fn some_value(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}

fn payload_from<T: Serialize + ?Sized>(data: &T) -> Result<Value, EncodingError> {
    serde_json::to_value(data).map_err(EncodingError::Payload)
}

fn payload_as<T: DeserializeOwned>(data: Option<&Value>) -> Result<Option<T>, EncodingError> {
    data.map(|value: &Value| T::deserialize(value).map_err(EncodingError::Decode))
        .transpose()
}

fn is_blank(text: &Option<String>) -> bool {
    text.as_deref().is_none_or(str::is_empty)
}

fn is_absent(data: &Option<Value>) -> bool {
    data.as_ref().is_none_or(Value::is_null)
}

fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.and_then(present))
}

fn non_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(some_value))
}


// End of file: /src/models/envelope.rs
