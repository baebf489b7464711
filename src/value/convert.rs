//! Conversions from the serde data models into subject [`Value`]s.
//!
//! Subjects are plain in-memory structures; these conversions exist so a
//! caller holding a `serde_json::Value` or `serde_yaml::Value` (or building
//! one with the `json!` macro) can hand it straight to a resolver.
//! Serializing a subject back out is the caller's concern.
//!
//! # Example
//!
//! ```
//! use objectpath::Value;
//!
//! let subject = Value::from(serde_json::json!({
//!     "name": {"first": "brian"},
//!     "hobbies": ["programming", "reading"],
//! }));
//!
//! assert!(subject.is_object());
//! assert!(subject.member("hobbies").is_some_and(Value::is_array));
//! ```

use super::{Number, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(convert_json_number(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Integers stay integers; everything else becomes a float.
fn convert_json_number(number: &serde_json::Number) -> Number {
    match number.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(number.as_f64().unwrap_or(f64::NAN)),
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Boolean(b),
            serde_yaml::Value::Number(n) => Value::Number(convert_yaml_number(&n)),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .filter_map(|(key, value)| {
                        // Entries under non-scalar keys are unaddressable by
                        // string segments and are skipped.
                        Some((yaml_key_to_string(&key)?, Value::from(value)))
                    })
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

fn convert_yaml_number(number: &serde_yaml::Number) -> Number {
    match number.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(number.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Renders a scalar YAML mapping key to the string form a path segment can
/// address. Container keys have no such form.
fn yaml_key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
