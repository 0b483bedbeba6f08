// commands/common_args.rs

//! # Common Command Arguments
//!
//! Arguments shared by more than one subcommand, and the helper that prints a
//! resolution report in the globally selected format.

use std::process;

use clap::{value_parser, Arg};
use log::debug;

use host_target::TargetIdentifier;

use crate::globals::output_format;
use crate::utils::display::catch_error_and_exit;
use crate::utils::output::{render_report, OutputFormat, Report};

/// Positional operating system name, as `uname -s` reports it
pub fn system() -> Arg {
    Arg::new("system")
        .required(true)
        .help("Operating system name (e.g., `Linux`, `Darwin`, `FreeBSD`)")
}

/// Positional machine name, as `uname -m` reports it
pub fn machine() -> Arg {
    Arg::new("machine")
        .required(true)
        .help("Machine architecture name (e.g., `x86_64`, `armv7l`, `amd64`)")
}

/// Positional canonical target identifier
pub fn target() -> Arg {
    Arg::new("target")
        .required(true)
        .help("Canonical target identifier (e.g., `linux-x86_64`)")
        .value_parser(value_parser!(TargetIdentifier))
}

/// Print a report, exiting with status 1 when the host has no target.
pub fn print_report(report: &Report) {
    debug!(
        "Report: system [{}] machine [{}] target [{:?}]",
        report.host.system, report.host.machine, report.target
    );

    let format = output_format();
    match render_report(report, format) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => catch_error_and_exit(&e.to_string()),
    }

    // JSON carries `null` for an unsupported host; the exit status still reports it.
    if format == OutputFormat::Json && report.target.is_none() {
        process::exit(1);
    }
}
