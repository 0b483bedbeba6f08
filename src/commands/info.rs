// commands/info.rs

//! # Info Command Module
//!
//! This module provides the `info` command, which shows what the host reports
//! about itself and what it resolves to, in a Unicode box. Unlike `host` it
//! always exits successfully.
//!
//! ## Example Usage
//! ```bash
//! ./host-target info
//! ```

use clap::{ArgMatches, Command};

use host_target::HostDescriptor;

use crate::app::{APP_NAME, APP_VERSION};
use crate::globals::output_format;
use crate::utils::display::{catch_error_and_exit, print_unicode_box, BorderColor};
use crate::utils::output::{render_report, OutputFormat, Report};

/// Configures the `info` command for the CLI application.
pub fn command() -> Command {
    Command::new("info").about("Display host details and the resolved target")
}

/// Text shown inside the info box.
pub fn info_message(report: &Report) -> String {
    let target = match report.target {
        Some(target) => target.to_string(),
        None => "unsupported".to_string(),
    };
    format!(
        "{} v{}\nsystem:  {}\nmachine: {}\ntarget:  {}",
        APP_NAME, APP_VERSION, report.host.system, report.host.machine, target
    )
}

/// Executes the `info` command.
pub fn execute(_matches: &ArgMatches) {
    let report = Report::resolve(HostDescriptor::current());

    match output_format() {
        OutputFormat::Json => match render_report(&report, OutputFormat::Json) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => catch_error_and_exit(&e.to_string()),
        },
        OutputFormat::Text => {
            let color = if report.target.is_some() {
                BorderColor::Green
            } else {
                BorderColor::Yellow
            };
            print_unicode_box(&info_message(&report), color);
        }
    }
}
