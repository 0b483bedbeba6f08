// commands/resolve.rs

//! # Resolve Command Module
//!
//! This module provides the `resolve` command, which maps an explicit
//! operating system name and machine name to a target identifier. It lets
//! build scripts ask about a host other than the one they run on.
//!
//! ## Example Usage
//! ```bash
//! ./host-target resolve Linux armv7l
//! ./host-target resolve FreeBSD amd64 --format json
//! ```

use clap::{ArgMatches, Command};

use host_target::HostDescriptor;

use crate::commands::common_args::{self, print_report};
use crate::utils::output::Report;

/// Configures the `resolve` command for the CLI application.
pub fn command() -> Command {
    Command::new("resolve")
        .about("Resolve the target identifier of an operating system and machine name")
        .arg(common_args::system())
        .arg(common_args::machine())
}

/// Executes the `resolve` command.
pub fn execute(matches: &ArgMatches) {
    let system = matches.get_one::<String>("system").unwrap();
    let machine = matches.get_one::<String>("machine").unwrap();

    let report = Report::resolve(HostDescriptor::new(system.as_str(), machine.as_str()));
    print_report(&report);
}
