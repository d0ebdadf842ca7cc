// Execution of command-line actions

use anyhow::Result;
use tracing::info;

use crate::config::{apply_assignments, load_bindings, Action};
use crate::domain::template::Template;
use crate::domain::value::Variables;

/// Run `action` and return the text to print
pub fn run(action: &Action) -> Result<String> {
    match action {
        Action::Expand {
            template,
            vars_file,
            assignments,
        } => {
            let mut variables = match vars_file {
                Some(path) => load_bindings(path)?,
                None => Variables::new(),
            };
            apply_assignments(&mut variables, assignments)?;
            info!(bindings = variables.len(), "expanding template");

            let template = Template::parse(template)?;
            Ok(template.expand(&variables))
        }
        Action::Parse { template, json } => {
            let template = Template::parse(template)?;
            if *json {
                Ok(serde_json::to_string_pretty(template.expressions())?)
            } else {
                Ok(template
                    .expressions()
                    .iter()
                    .map(|expression| format!("{:?}", expression))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}
