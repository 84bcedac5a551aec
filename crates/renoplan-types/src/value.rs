use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Possible values a calculation context can hold for a residence property.
///
/// Residence documents arrive from a JSON document store, so the variants
/// mirror what those documents actually contain: numbers (surface areas,
/// counts), text (labels the resolver must reject as non-numeric), one level
/// of nested objects (`woningSpecifiek`, `dimensions`), and nulls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContextValue {
    /// Whole-number property, e.g. a residence count.
    Integer(i64),
    /// Fractional property, e.g. a surface area in m².
    Number(f64),
    /// Textual property; never usable as a formula operand.
    Text(String),
    /// Nested namespace of further properties.
    Object(HashMap<String, ContextValue>),
    /// Explicitly absent value.
    Null,
}

impl ContextValue {
    /// Convenience accessor returning an `f64` representation if this value
    /// is numeric. Returns `None` when the variant is not `Integer` or
    /// `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ContextValue::Integer(i) => Some(*i as f64),
            ContextValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Nested namespace accessor.
    pub fn as_object(&self) -> Option<&HashMap<String, ContextValue>> {
        match self {
            ContextValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true for the `Null` variant.
    pub fn is_null(&self) -> bool {
        matches!(self, ContextValue::Null)
    }

    /// Type checking utility, used for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContextValue::Integer(_) => "integer",
            ContextValue::Number(_) => "number",
            ContextValue::Text(_) => "text",
            ContextValue::Object(_) => "object",
            ContextValue::Null => "null",
        }
    }

    /// Convert a JSON value from the document store into a context value.
    ///
    /// Numbers map to `Integer`/`Number`, strings to `Text`, objects to
    /// `Object`; anything the context has no use for (arrays, booleans,
    /// null) maps to `Null`.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ContextValue::Integer(i)
                } else {
                    ContextValue::Number(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => ContextValue::Text(s.clone()),
            serde_json::Value::Object(map) => ContextValue::Object(
                map.iter().map(|(k, v)| (k.clone(), ContextValue::from_json(v))).collect(),
            ),
            _ => ContextValue::Null,
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Integer(i) => write!(f, "{}", i),
            ContextValue::Number(n) => write!(f, "{}", n),
            ContextValue::Text(s) => write!(f, "\"{}\"", s),
            ContextValue::Object(map) => {
                let pairs: Vec<String> =
                    map.iter().map(|(k, v)| format!("\"{}\": {}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            ContextValue::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Number(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<HashMap<String, ContextValue>> for ContextValue {
    fn from(value: HashMap<String, ContextValue>) -> Self {
        ContextValue::Object(value)
    }
}
