// Variable bindings supplied to expansion

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Variable name to value table consumed by expansion
pub type Variables = HashMap<String, Value>;

/// A bound value.
///
/// Deserializes from `null`, a string, a sequence of strings or a mapping of
/// strings to strings. Mapping entries keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Undefined,
    String(String),
    List(Vec<String>),
    Map(IndexMap<String, String>),
}

impl Value {
    /// Whether this value contributes anything to an expansion.
    ///
    /// Empty strings are defined; empty lists and mappings are not.
    pub fn is_defined(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::String(_) => true,
            Value::List(list) => !list.is_empty(),
            Value::Map(map) => !map.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<IndexMap<String, String>> for Value {
    fn from(value: IndexMap<String, String>) -> Self {
        Value::Map(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Value {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}
