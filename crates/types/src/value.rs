use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholders that stand for "no value" in hand-written creature files.
const SENTINELS: [&str; 2] = ["N/A", "—"];

/// A loosely-typed scalar (or list of scalars) as found in creature files.
///
/// Creature files written by hand mix `"15"`, `15` and `["fire", "cold"]`
/// for the same field, so every displayable field goes through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// False for empty text, empty lists and the "N/A" / "—" placeholders.
    pub fn is_meaningful(&self) -> bool {
        match self {
            FieldValue::Text(s) => {
                let s = s.trim();
                !s.is_empty() && !SENTINELS.contains(&s)
            }
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Other(value) => !value.is_null(),
            FieldValue::Bool(_) | FieldValue::Int(_) | FieldValue::Float(_) => true,
        }
    }

    /// Display form with an explicit `+` for non-negative integers.
    /// Anything else is shown literally.
    pub fn signed(&self) -> String {
        match self {
            FieldValue::Int(n) if *n >= 0 => format!("+{}", n),
            other => other.to_string(),
        }
    }

    /// Value equality where `2` and `2.0` compare equal.
    pub fn same_value(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Float(b)) | (FieldValue::Float(b), FieldValue::Int(a)) => {
                *a as f64 == *b
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            FieldValue::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

/// Display text of an optional field, or `fallback` when it is absent.
pub fn display_or(value: Option<&FieldValue>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), FieldValue::to_string)
}

/// Display text of an optional field when it carries a real value.
pub fn meaningful(value: Option<&FieldValue>) -> Option<String> {
    value.filter(|v| v.is_meaningful()).map(FieldValue::to_string)
}
