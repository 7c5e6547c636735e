//! Tolerant decoders for record fields.
//!
//! The backend is loose about its field values: amounts arrive as numbers,
//! numeric strings or `null`, dates may carry a time part, and identifiers
//! may be numbers or strings. Each decoder here accepts any JSON value and
//! maps anything it cannot interpret to `None`, so one malformed field never
//! rejects the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Decodes a numeric field. Non-finite and non-numeric values become `None`.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

/// Decodes a calendar date field, dropping any time-of-day part.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => parse_date(&text),
        _ => None,
    })
}

/// Decodes a free-form text field. Scalars other than strings are rendered as text.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// Decodes an identifier that may be sent as either a number or a string.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// Rewrites a record object's keys to camelCase.
///
/// The backend may send `Name`, `name` or both for the same field. Serde
/// treats a field named twice as an error, so both spellings are folded into
/// the camelCase key before decoding. When both are present the camelCase
/// value wins and the PascalCase one is dropped. Values other than objects are
/// returned unchanged.
pub(crate) fn camel_case_keys(value: Value) -> Value {
    let Value::Object(object) = value else {
        return value;
    };

    let (pascal, camel): (Vec<_>, Vec<_>) = object
        .into_iter()
        .partition(|(key, _)| key.starts_with(|first: char| first.is_ascii_uppercase()));

    let mut normalized: Map<String, Value> = camel.into_iter().collect();
    for (key, value) in pascal {
        normalized.entry(lower_first(&key)).or_insert(value);
    }

    Value::Object(normalized)
}

fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn amount_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|amount| amount.is_finite())
}

/// Parses an ISO 8601 calendar date, ignoring a trailing time part.
///
/// Accepts `2024-03-15`, `2024-03-15T10:30:00` and `2024-03-15 10:30:00`.
/// Returns `None` for anything else.
pub fn parse_date(text: &str) -> Option<Date> {
    let text = text.trim();
    let date_part = text.get(..10)?;
    let rest = &text[10..];

    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }

    Date::parse(date_part, ISO_DATE).ok()
}
