use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};

/// Check that a dynamically typed input value is a string and borrow its text.
/// Any other JSON type is rejected with `InvalidInputType` before tokenization
/// ever runs.
pub fn validate(input: &Value) -> ConvertResult<&str> {
    match input {
        Value::String(text) => Ok(text),
        other => Err(ConvertError::InvalidInputType {
            received: json_type_name(other),
        }),
    }
}

/// JSON type name used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
