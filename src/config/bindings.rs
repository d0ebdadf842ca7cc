use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::domain::value::{Value, Variables};

/// Encoding of a bindings file, picked from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    Json,
    Yaml,
}

impl BindingsFormat {
    /// `.json` files are JSON; everything else is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BindingsFormat::Json,
            _ => BindingsFormat::Yaml,
        }
    }
}

pub fn parse_bindings(content: &str, format: BindingsFormat) -> Result<Variables> {
    match format {
        BindingsFormat::Json => {
            serde_json::from_str(content).context("Invalid JSON variable bindings")
        }
        BindingsFormat::Yaml => {
            serde_yaml::from_str(content).context("Invalid YAML variable bindings")
        }
    }
}

pub fn load_bindings(path: &Path) -> Result<Variables> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read bindings file {}", path.display()))?;
    parse_bindings(&content, BindingsFormat::from_path(path))
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Parse a `NAME=VALUE` command-line assignment into a string binding
pub fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("Invalid variable assignment '{}': expected NAME=VALUE", raw);
    };
    if name.is_empty() {
        bail!("Invalid variable assignment '{}': empty name", raw);
    }
    Ok((name.to_string(), Value::from(value)))
}

/// Apply assignments over `variables`, later ones winning
pub fn apply_assignments(variables: &mut Variables, assignments: &[String]) -> Result<()> {
    for raw in assignments {
        let (name, value) = parse_assignment(raw)?;
        variables.insert(name, value);
    }
    Ok(())
}
