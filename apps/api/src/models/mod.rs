//! Typed records exchanged between pipeline stages.
//!
//! Every record that comes back from a structuring step is deserialized into
//! one of these types and then passed through `Validate` before use.

pub mod cheat_sheet;
pub mod fit_score;
pub mod interview;
pub mod job;
pub mod profile;
pub mod references;
pub mod research;
pub mod resume;

use serde::{de::Error as _, Deserialize, Deserializer};

/// Post-parse schema check. May trim over-long lists in place; returns the
/// reason when the record cannot be accepted.
pub trait Validate {
    fn validate(&mut self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for serde_json::Value {}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string, number, or null. Models write years and counts either way.
pub(crate) fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a string, got {other}"))),
    }
}

/// Accepts a single string or a list of strings.
pub(crate) fn text_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(vec![]),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(vec![]),
        serde_json::Value::String(s) => Ok(vec![s]),
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.trim().is_empty())
            .collect()),
        other => Err(D::Error::custom(format!(
            "expected a string or list, got {other}"
        ))),
    }
}

/// Scores may arrive as integers or floats; both are rounded to an integer.
pub(crate) fn score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|f| f.round() as i64))
        .ok_or_else(|| D::Error::custom(format!("score {number} is not representable")))
}

pub(crate) fn check_score(label: &str, value: i64) -> Result<(), String> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(format!("{label} score {value} is outside 0-100"))
    }
}
