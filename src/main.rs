// main.rs

//! # host-target - Main Entry Point
//!
//! Command line front end for resolving the host machine's canonical
//! build-target identifier (`linux-x86_64`, `macosx-x86_64`, ...).
//!
//! ## Global Arguments
//!
//! These arguments can be specified for **any command**.
//!
//! - `--log-level` - The logging level (default: `info`). Possible values: `error`, `warn`, `info`, `debug`, `trace`.
//! - `--format` - Output format (default: `text`). Possible values: `text`, `json`.
//! - `--no-color` - Disable colored output.
//!
//! ## Example Usage
//! ```bash
//! ./host-target host
//! ./host-target resolve Linux armv7l --format json
//! ./host-target check linux-x86_64
//! ./host-target list
//! ```
//!
//! For detailed help, use `--help` or `-h` flags.

mod app;
mod commands;
mod globals;
mod utils;

use clap::{Arg, ArgAction, Command};
use log::debug;

use crate::app::{
    APP_DESCRIPTION, APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FORMAT, LOG_LEVELS,
    OUTPUT_FORMATS,
};
use crate::utils::logging::initialize_logger;
use crate::utils::output::OutputFormat;

/// Builds the command-line interface.
fn cli() -> Command {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_DESCRIPTION)
        // ====================
        // Global Flags
        // ====================
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Set the logging level")
                .global(true)
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .ignore_case(true)
                .default_value(DEFAULT_LOG_LEVEL)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .global(true)
                .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS))
                .ignore_case(true)
                .default_value(DEFAULT_OUTPUT_FORMAT)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // ====================
        // Subcommand Definitions
        // ====================
        .subcommand(commands::host::command())
        .subcommand(commands::resolve::command())
        .subcommand(commands::check::command())
        .subcommand(commands::list::command())
        .subcommand(commands::info::command())
}

/// Main function that initializes the CLI and handles command execution.
fn main() {
    let matches = cli().get_matches();

    // ====================
    // Initialize Logger
    // ====================
    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    initialize_logger(log_level);

    debug!("Logger initialized with level: {}", log_level);

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    let format = matches
        .get_one::<String>("format")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_default();
    debug!("Output format: {:?}", format);

    globals::init_globals(format);

    // ====================
    // Command Execution
    // ====================
    match matches.subcommand() {
        Some(("host", sub_matches)) => commands::host::execute(sub_matches),
        Some(("resolve", sub_matches)) => commands::resolve::execute(sub_matches),
        Some(("check", sub_matches)) => commands::check::execute(sub_matches),
        Some(("list", sub_matches)) => commands::list::execute(sub_matches),
        Some(("info", sub_matches)) => commands::info::execute(sub_matches),
        _ => {
            print_error!("Unknown command. Use --help for usage.");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["host-target", "resolve", "Linux", "x86_64", "--format", "json"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("format").unwrap(), "json");
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "resolve");
        assert_eq!(sub.get_one::<String>("system").unwrap(), "Linux");
        assert_eq!(sub.get_one::<String>("machine").unwrap(), "x86_64");
    }

    #[test]
    fn test_check_rejects_unknown_target() {
        let result = cli().try_get_matches_from(["host-target", "check", "windows-x86_64"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_parses_target() {
        let matches = cli()
            .try_get_matches_from(["host-target", "check", "linux-armv7"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<host_target::TargetIdentifier>("target"),
            Some(&host_target::TargetIdentifier::LinuxArmv7)
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(cli().try_get_matches_from(["host-target"]).is_err());
    }
}
