use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Expand {
        template: String,
        vars_file: Option<PathBuf>,
        assignments: Vec<String>,
    },
    Parse {
        template: String,
        json: bool,
    },
}

fn template_arg() -> Arg {
    Arg::new("template")
        .value_name("TEMPLATE")
        .help("URI template, e.g. 'https://example.com/{user}{?q}'")
        .required(true)
}

pub fn build_command() -> Command {
    Command::new("uritemplate")
        .about("Expand RFC 6570 URI templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("expand")
                .about("Expand a template and print the result")
                .arg(template_arg())
                .arg(
                    Arg::new("vars")
                        .short('f')
                        .long("vars")
                        .value_name("FILE")
                        .help("JSON (.json) or YAML file of variable bindings"),
                )
                .arg(
                    Arg::new("var")
                        .short('v')
                        .long("var")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append)
                        .help("Bind a string variable; overrides the bindings file"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parsed expressions of a template")
                .arg(template_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON"),
                ),
        )
}

impl Action {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        match matches.subcommand() {
            Some(("expand", sub)) => Ok(Action::Expand {
                template: required_template(sub)?,
                vars_file: sub.get_one::<String>("vars").map(PathBuf::from),
                assignments: sub
                    .get_many::<String>("var")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            }),
            Some(("parse", sub)) => Ok(Action::Parse {
                template: required_template(sub)?,
                json: sub.get_flag("json"),
            }),
            _ => anyhow::bail!("Expected a subcommand: expand or parse"),
        }
    }
}

fn required_template(matches: &ArgMatches) -> Result<String> {
    matches
        .get_one::<String>("template")
        .cloned()
        .context("Missing template argument")
}
