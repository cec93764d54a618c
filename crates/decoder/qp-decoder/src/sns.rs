//! SNS notification envelopes.
//!
//! SNS delivers to SQS wrapped in a JSON envelope:
//!
//! ```json
//! {
//!   "Type" : "Notification",
//!   "Message" : "s3://another-bucket/path/to/file",
//!   "Timestamp" : "2023-05-22T23:21:09.550Z"
//! }
//! ```
//!
//! Only `Message` is read, and its string value is returned as-is.

use qp_error::ParseError;
use serde_json::Value;

/// Name of the envelope member carrying the published message.
pub const MESSAGE_FIELD: &str = "Message";

/// Extract the `Message` member of an SNS envelope.
pub fn extract_message(payload: &str) -> Result<String, ParseError> {
    let mut envelope: Value =
        serde_json::from_str(payload).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let message = envelope
        .as_object_mut()
        .and_then(|members| members.remove(MESSAGE_FIELD));

    match message {
        Some(Value::String(message)) => Ok(message),
        None | Some(Value::Null) => Err(ParseError::NotFound {
            expression: MESSAGE_FIELD.to_string(),
        }),
        Some(other) => Err(ParseError::WrongType {
            expression: MESSAGE_FIELD.to_string(),
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
