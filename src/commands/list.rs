// commands/list.rs

//! # List Command Module
//!
//! This module provides the `list` command, which prints every supported
//! target together with the operating system and machine names that resolve
//! to it. A trailing `*` marks a machine-name prefix.
//!
//! ## Example Usage
//! ```bash
//! ./host-target list
//! ./host-target list --format json
//! ```

use clap::{ArgMatches, Command};

use crate::globals::output_format;
use crate::utils::display::catch_error_and_exit;
use crate::utils::output::render_target_table;

/// Configures the `list` command for the CLI application.
pub fn command() -> Command {
    Command::new("list").about("List supported targets and the hosts that resolve to them")
}

/// Executes the `list` command.
pub fn execute(_matches: &ArgMatches) {
    match render_target_table(output_format()) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => catch_error_and_exit(&e.to_string()),
    }
}
