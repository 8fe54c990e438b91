//! Recursive key rewriting over JSON bodies.
//!
//! Only object keys are rewritten. Primitive values, strings, and numbers
//! pass through untouched; arrays map element-wise. Nesting beyond
//! [`MAX_DEPTH`] is an error rather than a stack overflow, so pathological
//! or adversarial bodies fail detectably.

use crate::error::{Result, SdkError};
use crate::transform::key::{camel_to_snake, snake_to_camel};
use serde_json::{Map, Value};

/// Maximum object/array nesting accepted by the body transforms.
pub const MAX_DEPTH: usize = 128;

/// Rewrite every object key in `value` from `snake_case` to `camelCase`.
pub fn keys_to_camel(value: &Value) -> Result<Value> {
    convert(value, snake_to_camel, 0)
}

/// Rewrite every object key in `value` from `camelCase` to `snake_case`.
pub fn keys_to_snake(value: &Value) -> Result<Value> {
    convert(value, camel_to_snake, 0)
}

fn convert(value: &Value, rename: fn(&str) -> String, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(SdkError::TransformDepthExceeded(depth));
    }

    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(rename(key), convert(val, rename, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => {
            let converted = items
                .iter()
                .map(|item| convert(item, rename, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(converted))
        }
        other => Ok(other.clone()),
    }
}
