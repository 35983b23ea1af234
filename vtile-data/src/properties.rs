use std::collections::hash_map::{self, HashMap};

use serde::{Deserialize, Serialize};

use crate::Value;

static NONE: Value = Value::None;

/// Schema-free attributes of a feature: an unordered map of unique string keys to [`Value`]s.
///
/// Lookups never fail. Typed getters return `None` (or a default value) both when the key is missing and when the
/// stored value has a different type, and never convert between text and numbers.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    props: HashMap<String, Value>,
}

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for the key, or [`Value::None`] if the key is not present.
    pub fn get(&self, key: &str) -> &Value {
        self.props.get(key).unwrap_or(&NONE)
    }

    /// Whether the key is present, including keys explicitly set to [`Value::None`].
    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Returns the number stored for the key.
    ///
    /// `None` if the key is missing or the stored value is not a number.
    pub fn get_numeric(&self, key: &str) -> Option<f32> {
        self.props.get(key).and_then(Value::as_number)
    }

    /// Same as [`Properties::get_numeric`] but returns `0.0` on any miss.
    pub fn numeric(&self, key: &str) -> f32 {
        self.get_numeric(key).unwrap_or(0.0)
    }

    /// Returns the text stored for the key.
    ///
    /// `None` if the key is missing or the stored value is not text.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Same as [`Properties::get_string`] but returns an empty string on any miss.
    pub fn string(&self, key: &str) -> &str {
        self.get_string(key).unwrap_or("")
    }

    /// Sets the value for the key, replacing the previous one if the key was already present.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.props.insert(key.into(), value.into());
    }

    /// Removes the key and returns its value, if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.props.remove(key)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.props.clear();
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over key/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over the keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Properties::new();
        properties.extend(iter);
        properties
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Properties {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}
