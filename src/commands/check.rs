// commands/check.rs

//! # Check Command Module
//!
//! This module provides the `check` command, which succeeds only when this
//! host resolves to the given target identifier. Intended for shell
//! conditionals in build scripts.
//!
//! ## Example Usage
//! ```bash
//! ./host-target check linux-aarch64 && echo "native aarch64 build"
//! ```

use std::process;

use clap::{ArgMatches, Command};
use log::debug;

use host_target::{host_target, AppError, TargetIdentifier};

use crate::commands::common_args;
use crate::{print_error, print_success};

/// Configures the `check` command for the CLI application.
pub fn command() -> Command {
    Command::new("check")
        .about("Exit successfully if this host resolves to the given target")
        .arg(common_args::target())
}

/// Compare the host target against the expected one.
pub fn check_target(
    expected: TargetIdentifier,
    actual: Option<TargetIdentifier>,
) -> Result<(), AppError> {
    if actual == Some(expected) {
        Ok(())
    } else {
        Err(AppError::HostMismatch { expected, actual })
    }
}

/// Executes the `check` command.
pub fn execute(matches: &ArgMatches) {
    let expected = *matches.get_one::<TargetIdentifier>("target").unwrap();
    let actual = host_target();
    debug!("Expected target [{}], host target [{:?}]", expected, actual);

    match check_target(expected, actual) {
        Ok(()) => print_success!("Host matches {}", expected),
        Err(e) => {
            print_error!("{}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_target_match() {
        assert!(check_target(
            TargetIdentifier::LinuxX86_64,
            Some(TargetIdentifier::LinuxX86_64)
        )
        .is_ok());
    }

    #[test]
    fn test_check_target_mismatch() {
        let err = check_target(
            TargetIdentifier::LinuxAarch64,
            Some(TargetIdentifier::LinuxArmv7),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::HostMismatch {
                expected: TargetIdentifier::LinuxAarch64,
                actual: Some(TargetIdentifier::LinuxArmv7),
            }
        ));
    }

    #[test]
    fn test_check_target_unsupported_host() {
        assert!(check_target(TargetIdentifier::MacosxX86_64, None).is_err());
    }
}
