// platform.rs

//! # Platform Module
//!
//! This module describes the machine the process is running on as a
//! `HostDescriptor`: the operating system name and machine name in the
//! spelling `uname(2)` reports them (`Linux`, `Darwin`, `FreeBSD`; `x86_64`,
//! `amd64`, `armv7l`, ...).
//!
//! ## Features
//! - Queries `uname` on Unix hosts.
//! - Falls back to the compile-time target (`std::env::consts`) translated to
//!   uname spelling when `uname` is unavailable or fails.
//!
//! ## Example Usage
//! ```rust
//! use host_target::platform::HostDescriptor;
//!
//! let host = HostDescriptor::current();
//! println!("{} {}", host.system, host.machine);
//! ```

use std::env;

use log::debug;
use serde::Serialize;

/// The operating system and machine names of a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostDescriptor {
    pub system: String,
    pub machine: String,
}

impl HostDescriptor {
    pub fn new(system: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            machine: machine.into(),
        }
    }

    /// Describe the running host. Never fails; see `compiled()` for the fallback.
    pub fn current() -> Self {
        let host = query_uname().unwrap_or_else(Self::compiled);
        debug!("Host system: [{}] machine: [{}]", host.system, host.machine);
        host
    }

    /// Describe the target this binary was compiled for, spelled the way
    /// `uname` would report it.
    pub fn compiled() -> Self {
        Self {
            system: uname_system(env::consts::OS),
            machine: uname_machine(env::consts::OS, env::consts::ARCH),
        }
    }
}

#[cfg(unix)]
fn query_uname() -> Option<HostDescriptor> {
    match nix::sys::utsname::uname() {
        Ok(info) => Some(HostDescriptor {
            system: info.sysname().to_string_lossy().into_owned(),
            machine: info.machine().to_string_lossy().into_owned(),
        }),
        Err(e) => {
            debug!("uname failed, using compiled target instead: {}", e);
            None
        }
    }
}

#[cfg(not(unix))]
fn query_uname() -> Option<HostDescriptor> {
    None
}

fn uname_system(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        "windows" => "Windows",
        other => other,
    }
    .to_string()
}

fn uname_machine(os: &str, arch: &str) -> String {
    match (os, arch) {
        ("freebsd", "x86_64") => "amd64",
        ("windows", "x86_64") => "AMD64",
        ("windows", "aarch64") => "ARM64",
        ("macos", "aarch64") => "arm64",
        (_, "powerpc64") if cfg!(target_endian = "little") => "ppc64le",
        (_, "powerpc64") => "ppc64",
        (_, "arm") if cfg!(target_feature = "v7") => "armv7l",
        (_, other) => other,
    }
    .to_string()
}
