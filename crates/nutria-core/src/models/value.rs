use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// A typed field value: the outcome of coercing one raw textual field.
///
/// Serializes untagged, so collaborators see a plain JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Value {
    /// Whole number written with digits only (e.g. `72`).
    Integer(i64),
    /// Any value containing a decimal point that parses as a float (e.g. `72.5`).
    Number(f64),
    /// Everything else, including numeric-looking values that fail to parse
    /// (e.g. `1.2.3`).
    Text(String),
}

/// One typed parse attempt. Returns `None` when the attempt does not apply
/// or the value fails to parse.
type Attempt = fn(&str) -> Option<Value>;

/// Attempts run in order; the first match wins and `Text` is the fallback.
const ATTEMPTS: [Attempt; 2] = [parse_decimal, parse_whole];

impl Value {
    /// Coerce a trimmed, unquoted field value into its typed form.
    ///
    /// A value containing `.` is only ever tried as a float; a value made of
    /// ASCII digits only is tried as an integer; anything else, and any failed
    /// attempt, is kept verbatim as text.
    pub fn coerce(raw: &str) -> Value {
        ATTEMPTS
            .iter()
            .find_map(|attempt| attempt(raw))
            .unwrap_or_else(|| Value::Text(raw.to_string()))
    }

    /// Numeric view: integers and floats both read as `f64`, text is not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }
}

fn parse_decimal(raw: &str) -> Option<Value> {
    if !raw.contains('.') {
        return None;
    }
    // Surrounding whitespace is tolerated here; the text fallback keeps `raw`.
    match raw.trim().parse::<f64>() {
        Ok(n) => Some(Value::Number(n)),
        Err(_) => {
            debug!(value = raw, "decimal-looking value kept as text");
            None
        }
    }
}

/// Strict: no surrounding whitespace, and only ASCII digits. Non-ASCII
/// decimal digits (e.g. Arabic-Indic `٣٢`) are kept as text.
fn parse_whole(raw: &str) -> Option<Value> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) => Some(Value::Integer(n)),
        Err(_) => {
            // Only overflow can get here.
            debug!(value = raw, "integer out of range, kept as text");
            None
        }
    }
}

impl fmt::Display for Value {
    /// Floats with an integral value keep one decimal place (`70.0`), so a
    /// rendered value still shows how it was written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 => {
                write!(f, "{n:.1}")
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
