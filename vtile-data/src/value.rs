use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Value of a feature property.
///
/// A value is always exactly one of the three states. `Value::None` is a legitimate stored value: a key mapped to
/// `None` is still [contained](crate::Properties::contains) in the properties.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value.
    #[default]
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f32),
}

impl Value {
    /// Returns true if the value is in the `None` state.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the text if the value holds one. Numbers are not converted.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the number if the value holds one. Text is not parsed.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "<NONE>"),
            Value::String(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::None,
        }
    }
}
