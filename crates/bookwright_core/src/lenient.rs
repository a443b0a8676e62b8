//! Forgiving field deserializers for model-produced outlines.
//!
//! Language models routinely send page counts as strings, drop fields, or
//! emit `null` where a list belongs. These helpers absorb that noise at the
//! field level so a single bad value never rejects the whole outline.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Largest count kept; anything above it is treated as absent.
pub const MAX_COUNT: u32 = i32::MAX as u32;

/// Reads any scalar as text; `null`, arrays and objects become empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Reads a count in `0..=MAX_COUNT` from an integer, float or numeric string.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| u32::try_from(v).ok().filter(|v| *v <= MAX_COUNT))
            .unwrap_or_else(|| n.as_f64().and_then(float_count)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .map(|v| u32::try_from(v).ok().filter(|v| *v <= MAX_COUNT))
                .unwrap_or_else(|| trimmed.parse::<f64>().ok().and_then(float_count))
        }
        _ => None,
    })
}

/// Reads a list, treating `null` as empty. Non-list values are rejected.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn float_count(f: f64) -> Option<u32> {
    let rounded = f.round();
    if rounded.is_finite() && rounded >= 0.0 && rounded <= f64::from(MAX_COUNT) {
        Some(rounded as u32)
    } else {
        None
    }
}
