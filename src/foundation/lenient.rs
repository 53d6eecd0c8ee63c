//! Permissive readers over raw JSON values.
//!
//! Course descriptions are hand-written. A field holding the wrong JSON type reads as absent
//! rather than failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a string; numbers and booleans are stringified, everything else is `None`.
pub(crate) fn as_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read an integer; numeric strings are accepted, fractions are truncated.
pub(crate) fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    }
}

/// Read a truthy flag the way a loosely-typed author expects.
pub(crate) fn as_bool(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "yes" | "1"),
        _ => false,
    }
}

/// Read a list of strings; a lone string becomes a one-element list.
pub(crate) fn as_string_list(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items.iter().filter_map(as_string).collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}

pub(crate) fn string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_string(&Value::deserialize(d)?))
}

pub(crate) fn integer<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_i64(&Value::deserialize(d)?))
}

pub(crate) fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_bool(&Value::deserialize(d)?))
}

pub(crate) fn string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_string_list(&Value::deserialize(d)?))
}

/// Deserialize `T` from the value, falling back to `T::default()` when its shape is wrong.
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let v = Value::deserialize(d)?;
    Ok(serde_json::from_value(v).unwrap_or_default())
}

/// Deserialize a list of `T`; elements whose shape is wrong become `T::default()`.
///
/// Malformed entries stay in place so validation can still point at them by index.
pub(crate) fn list_or_default<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    match Value::deserialize(d)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
