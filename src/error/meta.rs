//! Key resolution errors

use serde_json::Value;

use super::{DeclcfgError, DuplicateKey};

/// Creates a type mismatch error for a well-known key holding a non-string value
pub fn type_mismatch(key: impl Into<String>, value: &Value) -> DeclcfgError {
    DeclcfgError::TypeMismatch {
        key: key.into(),
        kind: kind_of(value).to_string(),
        value: value.to_string(),
    }
}

/// Creates an aggregate duplicate keys error
pub fn duplicate_keys(duplicates: Vec<DuplicateKey>) -> DeclcfgError {
    DeclcfgError::DuplicateKeys { duplicates }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
