//! Property value representation.

use std::fmt;

/// A value recorded for one occurrence of a key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text after the separator.
    Text(String),
    /// The key appeared without a separator.
    Present,
}

impl Value {
    /// Returns `true` if this is a key-only occurrence.
    pub fn is_present(&self) -> bool {
        matches!(self, Value::Present)
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Present => None,
        }
    }

    /// Returns `Some(true)` for a key-only occurrence, so callers that treat
    /// bare keys as flags can read them as booleans.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Present => Some(true),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Present => write!(f, "true"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        match s {
            Some(s) => Value::Text(s.to_string()),
            None => Value::Present,
        }
    }
}
