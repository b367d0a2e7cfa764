//! Business logic (loader, transform, migration runner)

pub mod loader;
pub mod runner;
pub mod transform;

use serde_json::Value;

/// Human-readable name for a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
