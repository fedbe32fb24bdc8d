use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DraftError {
    /// A field that must be a sequence (or the root object) has another shape
    #[error("Malformed input: `{field}` must be {expected}, found {shape}")]
    MalformedInput {
        field: String,
        expected: String,
        shape: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DraftError {
    pub fn malformed(field: &str, expected: &str, value: &Value) -> Self {
        Self::MalformedInput {
            field: field.to_string(),
            expected: expected.to_string(),
            shape: shape_of(value).to_string(),
        }
    }

    /// Name of the offending field, if the error is a shape mismatch
    pub fn field(&self) -> Option<&str> {
        match self {
            DraftError::MalformedInput { field, .. } => Some(field),
            DraftError::Parse(_) => None,
        }
    }
}

impl From<JsonError> for DraftError {
    fn from(error: JsonError) -> Self {
        Self::Parse(error.to_string())
    }
}

/// Short description of a JSON value's shape
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;
