// error.rs

//! # Error Handling Module
//!
//! This module defines the `AppError` enum used across the host-target
//! application. Resolving a host never fails: an unrecognized host is an
//! ordinary `None`. Errors only arise when parsing target identifiers from
//! text and when the command line reports an outcome to the user.
//!
//! # Usage Example
//! ```rust
//! use host_target::error::AppError;
//! use host_target::target::TargetIdentifier;
//!
//! let err = "linux-sparc".parse::<TargetIdentifier>().unwrap_err();
//! assert!(matches!(err, AppError::UnknownTarget(_)));
//! ```

use crate::target::TargetIdentifier;

/// Represents errors that may occur within the application.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A string did not name one of the canonical target identifiers.
    #[error("Unknown target identifier: {0}")]
    UnknownTarget(String),

    /// The given host descriptor has no entry in the target table.
    #[error("Host platform is not supported (system: {system}, machine: {machine})")]
    UnsupportedHost { system: String, machine: String },

    /// The host resolved to a different target than the one requested.
    #[error("Host target mismatch: expected {expected}, found {}", display_actual(.actual))]
    HostMismatch {
        expected: TargetIdentifier,
        actual: Option<TargetIdentifier>,
    },

    /// Wrapper for JSON rendering errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn display_actual(actual: &Option<TargetIdentifier>) -> String {
    match actual {
        Some(target) => target.to_string(),
        None => "an unsupported host".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_host_message() {
        let err = AppError::UnsupportedHost {
            system: "Windows".to_string(),
            machine: "AMD64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Host platform is not supported (system: Windows, machine: AMD64)"
        );
    }

    #[test]
    fn test_host_mismatch_message() {
        let err = AppError::HostMismatch {
            expected: TargetIdentifier::LinuxAarch64,
            actual: Some(TargetIdentifier::LinuxX86_64),
        };
        assert_eq!(
            err.to_string(),
            "Host target mismatch: expected linux-aarch64, found linux-x86_64"
        );

        let err = AppError::HostMismatch {
            expected: TargetIdentifier::MacosxX86_64,
            actual: None,
        };
        assert_eq!(
            err.to_string(),
            "Host target mismatch: expected macosx-x86_64, found an unsupported host"
        );
    }
}
