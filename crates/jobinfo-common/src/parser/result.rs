use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Placeholder for a field that never matched.
pub const UNKNOWN: &str = "unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Value(String),
    Unknown,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Value(v) => Some(v),
            FieldValue::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Unknown)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Unknown, FieldValue::Value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Value(v) => f.write_str(v),
            FieldValue::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Value(v) => serializer.serialize_str(v),
            FieldValue::Unknown => serializer.serialize_none(),
        }
    }
}

/// Outcome of one parse. Holds every output field of the table, in table
/// order, and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    fields: Vec<(&'static str, FieldValue)>,
}

impl ParseResult {
    pub(crate) fn new(fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { fields }
    }

    /// `None` if `name` is not an output field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// The captured value, if the field matched.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
