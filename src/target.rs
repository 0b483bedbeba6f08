// target.rs

//! # Target Module
//!
//! The canonical build-target identifiers and the decision table that maps a
//! host descriptor (operating system name, machine name) onto them.
//!
//! The table is deliberately closed. A descriptor that matches no rule
//! resolves to `None`; there is no guessing for nearby architectures.
//!
//! ## Example Usage
//! ```rust
//! use host_target::platform::HostDescriptor;
//! use host_target::target::{resolve, TargetIdentifier};
//!
//! let host = HostDescriptor::new("Linux", "armv7l");
//! assert_eq!(resolve(&host), Some(TargetIdentifier::LinuxArmv7));
//!
//! let host = HostDescriptor::new("Darwin", "arm64");
//! assert_eq!(resolve(&host), None);
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::Serialize;

use crate::error::AppError;
use crate::platform::HostDescriptor;

/// A canonical build-target identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetIdentifier {
    #[serde(rename = "linux-x86_64")]
    LinuxX86_64,
    #[serde(rename = "linux-armv7")]
    LinuxArmv7,
    #[serde(rename = "linux-aarch64")]
    LinuxAarch64,
    #[serde(rename = "linux-powerpc64")]
    LinuxPowerpc64,
    #[serde(rename = "linux-powerpc64le")]
    LinuxPowerpc64le,
    #[serde(rename = "macosx-x86_64")]
    MacosxX86_64,
    #[serde(rename = "freebsd-x86_64")]
    FreebsdX86_64,
}

impl TargetIdentifier {
    /// Every known identifier, in table order.
    pub const ALL: [TargetIdentifier; 7] = [
        TargetIdentifier::LinuxX86_64,
        TargetIdentifier::LinuxArmv7,
        TargetIdentifier::LinuxAarch64,
        TargetIdentifier::LinuxPowerpc64,
        TargetIdentifier::LinuxPowerpc64le,
        TargetIdentifier::MacosxX86_64,
        TargetIdentifier::FreebsdX86_64,
    ];

    /// The canonical string form, e.g. `linux-x86_64`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetIdentifier::LinuxX86_64 => "linux-x86_64",
            TargetIdentifier::LinuxArmv7 => "linux-armv7",
            TargetIdentifier::LinuxAarch64 => "linux-aarch64",
            TargetIdentifier::LinuxPowerpc64 => "linux-powerpc64",
            TargetIdentifier::LinuxPowerpc64le => "linux-powerpc64le",
            TargetIdentifier::MacosxX86_64 => "macosx-x86_64",
            TargetIdentifier::FreebsdX86_64 => "freebsd-x86_64",
        }
    }
}

impl fmt::Display for TargetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetIdentifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetIdentifier::ALL
            .iter()
            .copied()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| AppError::UnknownTarget(s.to_string()))
    }
}

/// How a rule tests the machine name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "match", content = "machine", rename_all = "lowercase")]
pub enum MachineMatch {
    /// Full-string equality.
    Exact(&'static str),
    /// Any machine name beginning with the given prefix.
    Prefix(&'static str),
}

impl MachineMatch {
    pub fn matches(&self, machine: &str) -> bool {
        match self {
            MachineMatch::Exact(name) => machine == *name,
            MachineMatch::Prefix(prefix) => machine.starts_with(prefix),
        }
    }
}

impl fmt::Display for MachineMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MachineMatch::Exact(name) => f.write_str(name),
            MachineMatch::Prefix(prefix) => write!(f, "{}*", prefix),
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetRule {
    pub target: TargetIdentifier,
    pub system: &'static str,
    #[serde(flatten)]
    pub machine: MachineMatch,
}

impl TargetRule {
    pub fn matches(&self, host: &HostDescriptor) -> bool {
        host.system == self.system && self.machine.matches(&host.machine)
    }
}

/// The decision table, evaluated top to bottom; the first matching rule wins.
///
/// Physical armv7 machines report suffixed names (`armv7l`, `armv7hf`, ...),
/// so that family is the only prefix rule.
pub const TARGET_TABLE: &[TargetRule] = &[
    TargetRule {
        target: TargetIdentifier::LinuxX86_64,
        system: "Linux",
        machine: MachineMatch::Exact("x86_64"),
    },
    TargetRule {
        target: TargetIdentifier::LinuxArmv7,
        system: "Linux",
        machine: MachineMatch::Prefix("armv7"),
    },
    TargetRule {
        target: TargetIdentifier::LinuxAarch64,
        system: "Linux",
        machine: MachineMatch::Exact("aarch64"),
    },
    TargetRule {
        target: TargetIdentifier::LinuxPowerpc64,
        system: "Linux",
        machine: MachineMatch::Exact("ppc64"),
    },
    TargetRule {
        target: TargetIdentifier::LinuxPowerpc64le,
        system: "Linux",
        machine: MachineMatch::Exact("ppc64le"),
    },
    TargetRule {
        target: TargetIdentifier::MacosxX86_64,
        system: "Darwin",
        machine: MachineMatch::Exact("x86_64"),
    },
    TargetRule {
        target: TargetIdentifier::FreebsdX86_64,
        system: "FreeBSD",
        machine: MachineMatch::Exact("amd64"),
    },
];

/// Map a host descriptor to its target identifier, if the table has one.
pub fn resolve(host: &HostDescriptor) -> Option<TargetIdentifier> {
    let found = TARGET_TABLE.iter().find(|rule| rule.matches(host));
    match found {
        Some(rule) => {
            trace!(
                "{} {} matched rule {} {}",
                host.system,
                host.machine,
                rule.system,
                rule.machine
            );
            Some(rule.target)
        }
        None => {
            debug!("No target for system [{}] machine [{}]", host.system, host.machine);
            None
        }
    }
}

/// Resolve the target of the machine this process is running on.
pub fn host_target() -> Option<TargetIdentifier> {
    resolve(&HostDescriptor::current())
}
