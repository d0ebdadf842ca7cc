use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use uritemplate::{commands, config, ParseError};

const LOG_ENV: &str = "URITEMPLATE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let matches = config::build_command().get_matches();
    let result = config::Action::from_matches(&matches).and_then(|action| commands::run(&action));

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err.downcast_ref::<ParseError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
