//! SSH Deployment Form - Entry Point
//!
//! Loads a stored deployment record, applies `--set=field=value` edits and
//! prints the resulting record and error map.

use std::env;
use std::process::ExitCode;

use colored::Colorize;
use sshdeploy_form::app::args::CliArgs;
use sshdeploy_form::app::run::run;
use sshdeploy_form::utils::version_info;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match CliArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            eprintln!("Usage: sshdeploy-form [--record=<path>] [--settings=<path>] [--set=<field>=<value>]... [--out=<path>]");
            return ExitCode::from(2);
        }
    };

    if args.version {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{e}"),
        }
        return ExitCode::SUCCESS;
    }

    let outcome = match run(&args).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to run the form: {e}");
            eprintln!("{}", e.to_string().red());
            return ExitCode::from(2);
        }
    };

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::from(2);
        }
    }

    for (field, message) in outcome.errors.messages() {
        eprintln!("{}: {}", field.bold(), message.red());
    }

    if outcome.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
