// Common test utilities shared across test files

use indexmap::IndexMap;
use serde::Deserialize;
use uritemplate::Variables;

/// Expected output: one exact string, or any of several acceptable ones
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    One(String),
    Any(Vec<String>),
}

impl Expected {
    #[allow(dead_code)]
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Expected::One(expected) => expected == actual,
            Expected::Any(alternatives) => alternatives.iter().any(|e| e == actual),
        }
    }
}

/// One section of a fixture file
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct Example {
    pub level: Option<u8>,
    pub variables: Variables,
    pub testcases: Vec<(String, Expected)>,
}

/// Load a fixture file from tests/fixtures, keeping section order
#[allow(dead_code)]
pub fn load_examples(file: &str) -> IndexMap<String, Example> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), file);
    let content = std::fs::read_to_string(&path).expect("Failed to read fixture file");
    serde_json::from_str(&content).expect("Invalid fixture file")
}

/// Build bindings from name/value pairs
#[allow(dead_code)]
pub fn vars<V: Into<uritemplate::Value>>(pairs: Vec<(&str, V)>) -> Variables {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.into()))
        .collect()
}
