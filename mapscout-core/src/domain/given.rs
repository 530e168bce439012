//! "Not given" sentinel handling
//!
//! The scraper fills every field it could not extract with the literal
//! string `"Not given"`. Fields may also arrive as `null`, as empty strings,
//! or as numbers encoded in strings. Every "no data" shape collapses to
//! `None`; a value that cannot be interpreted is treated the same way rather
//! than failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Literal the backend uses for fields it could not extract
pub const NOT_GIVEN: &str = "Not given";

/// Returns true when a raw string carries no data
pub fn is_not_given(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_GIVEN) || trimmed == "N/A"
}

/// Deserializes an optional text field
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !is_not_given(&s) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserializes an optional floating point field (ratings, coordinates)
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !is_not_given(&s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// Deserializes an optional non-negative count (review counts)
///
/// Accepts thousands separators in string form, e.g. `"1,234"`.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) if !is_not_given(&s) => {
            s.trim().replace(',', "").parse::<u64>().ok()
        }
        _ => None,
    })
}
