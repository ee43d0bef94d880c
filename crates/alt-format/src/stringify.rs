//! Conversion of heterogeneous arguments into ordered text tokens.
//!
//! Every argument becomes exactly one token and tokens keep call-site order.
//! Booleans always render as `true` / `false` and floats use their default
//! `Display` projection; no width or precision is ever applied here.
//!
//! ```rust
//! use alt_format::stringify_all;
//!
//! let tokens = stringify_all(&[&"alice", &3, &true, &0.5]);
//! assert_eq!(tokens, vec!["alice", "3", "true", "0.5"]);
//! ```

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::error::{FormatError, Result};

/// Stringifies every value, preserving order and length.
pub fn stringify_all(values: &[&dyn Display]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Formats a JSON value as a single token.
///
/// Strings are emitted without quotes and `null` becomes an empty token.
/// Arrays and objects fall back to their compact JSON text.
pub fn stringify_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Stringifies serializable values through their JSON projection.
///
/// This is the only stringification path that can fail: a `Serialize`
/// implementation may refuse to produce a value (e.g. a map with non-string
/// keys). The failing argument's position is reported.
pub fn stringify_serialized<T: Serialize>(values: &[T]) -> Result<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::to_value(value)
                .map(|v| stringify_json(&v))
                .map_err(|source| FormatError::Stringify { index, source })
        })
        .collect()
}
