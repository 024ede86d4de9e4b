//! Object and value model produced by the parser.
//!
//! A JSON-Lite document is a tree of [`Object`]s whose leaves are strings.
//! Values are a proper tagged union, so every accessor resolves the variant
//! with an exhaustive match instead of runtime type probing.

use std::collections::{BTreeMap, BTreeSet};

/// A single JSON-Lite value: a string or a nested object.
///
/// Exactly one variant, always. String content is stored verbatim as it
/// appeared between the quotes, escape sequences included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Quoted-string value.
    String(String),
    /// Nested object value, exclusively owned by its parent entry.
    Object(Object),
}

impl Value {
    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the string content if this is a string, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(_) => None,
        }
    }

    /// Returns the nested object if this is an object, `None` otherwise.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::String(_) => None,
            Value::Object(o) => Some(o),
        }
    }

    /// Variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }
}

/// A parsed JSON-Lite object: a mapping from string keys to [`Value`]s.
///
/// Keys are unique; writing an existing key replaces its value (last write
/// wins). The map is ordered so iteration and canonical output are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object {
    members: BTreeMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the object has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The value under `key`, whatever its variant.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    /// The string value under `key`, or `None` if the key is absent or
    /// holds an object. Absence is not an error.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.members.get(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The nested object under `key`, or `None` if the key is absent or
    /// holds a string.
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        match self.members.get(key) {
            Some(Value::Object(o)) => Some(o),
            _ => None,
        }
    }

    /// Insert or overwrite a string member.
    pub fn set_string(&mut self, key: String, value: String) {
        self.members.insert(key, Value::String(value));
    }

    /// Insert or overwrite an object member.
    pub fn set_object(&mut self, key: String, value: Object) {
        self.members.insert(key, Value::Object(value));
    }

    /// Every key currently holding a string value.
    pub fn string_keys(&self) -> BTreeSet<&str> {
        self.members
            .iter()
            .filter_map(|(key, value)| match value {
                Value::String(_) => Some(key.as_str()),
                Value::Object(_) => None,
            })
            .collect()
    }

    /// Every key currently holding an object value.
    pub fn object_keys(&self) -> BTreeSet<&str> {
        self.members
            .iter()
            .filter_map(|(key, value)| match value {
                Value::String(_) => None,
                Value::Object(_) => Some(key.as_str()),
            })
            .collect()
    }

    /// Iterate members in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(key, value)| (key.as_str(), value))
    }
}
