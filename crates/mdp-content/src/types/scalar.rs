use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{Number as JsonNumber, Value as JsonValue};

/// A leaf value found in a quote option tree.
///
/// Calculation responses mix numbers, strings and flags at the leaves. The
/// variant order matters for untagged deserialization: booleans first, then
/// numbers, then text.
///
/// # Example
///
/// ```
/// use mdp_content::Scalar;
///
/// let amount: Scalar = 1200.into();
/// assert_eq!(amount.as_number(), Some(1200.0));
/// assert_eq!(amount.to_string(), "1200");
///
/// let label: Scalar = "Full pension".into();
/// assert_eq!(label.as_text(), Some("Full pension"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Get this value as a number. Numeric text is parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }

    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Bool(_) | Scalar::Number(_) => None,
        }
    }

    /// Convert a JSON leaf into a scalar. Arrays, objects and null are not scalars.
    pub fn from_json(value: &JsonValue) -> Option<Scalar> {
        match value {
            JsonValue::Bool(b) => Some(Scalar::Bool(*b)),
            JsonValue::Number(n) => n.as_f64().map(Scalar::Number),
            JsonValue::String(s) => Some(Scalar::Text(s.clone())),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<Scalar> for JsonValue {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Bool(b) => JsonValue::Bool(b),
            Scalar::Number(n) => JsonNumber::from_f64(n).map_or(JsonValue::Null, JsonValue::Number),
            Scalar::Text(s) => JsonValue::String(s),
        }
    }
}
