//! Shallow defaults-then-overrides merge for request bodies.

use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Merge caller overrides over a defaults object.
///
/// Top-level keys from `overrides` replace the default value wholesale (no
/// deep merge). Keys absent from both sides never appear. `overrides` must
/// serialize to an object or to `null`; `null` leaves the defaults untouched.
pub fn merge_defaults<T>(mut defaults: Map<String, Value>, overrides: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(overrides)? {
        Value::Object(map) => {
            for (key, value) in map {
                defaults.insert(key, value);
            }
        }
        Value::Null => {}
        other => {
            return Err(Error::validation_with_context(
                "request overrides must be a JSON object",
                ErrorContext::new()
                    .with_details(format!("got {}", json_kind(&other)))
                    .with_source("merge_defaults"),
            ))
        }
    }
    Ok(Value::Object(defaults))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
