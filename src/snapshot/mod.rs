//! Snapshot parsing: persisted widget counters to display fields.
//!
//! The persisted value is loosely structured JSON written by the app. Parsing
//! happens in two steps:
//!
//! 1. **Decode** the optional raw text into a [`SnapshotRecord`]. Text that is
//!    not a JSON object becomes [`SnapshotRecord::Malformed`]; inside an object
//!    every field is decoded on its own into an `Option`, so a missing key and
//!    a value of the wrong type both end up as `None`.
//! 2. **Resolve** the record into a [`DisplayState`], substituting defaults.
//!    A record that is absent or malformed shows the `"--"` stock sentinel;
//!    a decoded record falls back to `0` per missing field.
//!
//! Neither step has an error path. [`parse`] is total and pure.

pub mod display;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub use display::DisplayState;

/// Counters decoded from a well-formed snapshot object.
///
/// Each field is independently optional. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    #[serde(default, deserialize_with = "lenient_int")]
    pub total_stock: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub inbound_today: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_updated: Option<String>,
}

impl WidgetSnapshot {
    /// Decode a JSON object. Field-level problems never fail the object.
    pub fn from_object(object: Map<String, Value>) -> Self {
        // Every field deserializer accepts any JSON value, so this cannot fail
        // for an object input.
        WidgetSnapshot::deserialize(Value::Object(object)).unwrap_or_default()
    }
}

/// Outcome of decoding the raw persisted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRecord {
    /// Nothing has been written under the widget key yet.
    Absent,
    /// Something was written but it is not a JSON object.
    Malformed,
    /// A JSON object, with per-field decode results.
    Decoded(WidgetSnapshot),
}

impl SnapshotRecord {
    /// Decode the optional raw value read from the preference store.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return SnapshotRecord::Absent;
        };

        // Only the leading object counts; anything written after it is ignored
        match serde_json::Deserializer::from_str(text)
            .into_iter::<Map<String, Value>>()
            .next()
        {
            Some(Ok(object)) => SnapshotRecord::Decoded(WidgetSnapshot::from_object(object)),
            _ => SnapshotRecord::Malformed,
        }
    }

    /// Whether this record should render as "no data yet".
    pub fn is_empty(&self) -> bool {
        !matches!(self, SnapshotRecord::Decoded(_))
    }
}

/// Turn an optional raw snapshot into the widget's display fields.
///
/// Never fails. See the module docs for the default rules.
pub fn parse(raw: Option<&str>) -> DisplayState {
    DisplayState::from_record(&SnapshotRecord::decode(raw))
}

/// Interpret a JSON value as an integer the way the app's counters are read.
///
/// Integers are taken as-is, floats are truncated toward zero and numeric
/// strings are decoded after trimming. A spelled-out `Infinity` string
/// saturates. Everything else is `None`.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            .or_else(|| number.as_f64().and_then(truncate_float)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>().ok().or_else(|| parse_float_text(text))
        }
        _ => None,
    }
}

// `as` saturates at the i64 bounds
fn truncate_float(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

fn parse_float_text(text: &str) -> Option<i64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return text.parse::<f64>().ok().map(|value| value as i64);
    }
    // `inf` and `nan` spellings stay text
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    text.parse::<f64>().ok().and_then(truncate_float)
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}
