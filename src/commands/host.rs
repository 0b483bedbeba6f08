// commands/host.rs

//! # Host Command Module
//!
//! This module provides the `host` command, which prints the canonical target
//! identifier of the machine it runs on. Unsupported hosts exit with status 1.
//!
//! ## Example Usage
//! ```bash
//! ./host-target host
//! ./host-target host --format json
//! ```

use clap::{ArgMatches, Command};

use host_target::HostDescriptor;

use crate::commands::common_args::print_report;
use crate::utils::output::Report;

/// Configures the `host` command for the CLI application.
pub fn command() -> Command {
    Command::new("host").about("Print the target identifier of this host")
}

/// Executes the `host` command.
pub fn execute(_matches: &ArgMatches) {
    let report = Report::resolve(HostDescriptor::current());
    print_report(&report);
}
