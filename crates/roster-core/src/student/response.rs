//! Opaque mutation responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body of an update or delete response.
///
/// Its shape is defined by the backend; the only field roster reads is an
/// optional human-readable `message`. An empty body is represented as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// A response carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self(serde_json::json!({ "message": message.into() }))
    }

    /// Returns the `message` field when it is a string.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
