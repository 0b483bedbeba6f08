// lib.rs

//! # host-target
//!
//! Resolves the host machine's canonical build-target identifier from its
//! operating system name and machine name. Build tooling branches on the
//! result; `None` means the host is not one of the supported platforms.
//!
//! ```rust
//! match host_target::host_target() {
//!     Some(target) => println!("building for {}", target),
//!     None => eprintln!("unsupported host"),
//! }
//! ```

pub mod error;
pub mod platform;
pub mod target;

pub use error::AppError;
pub use platform::HostDescriptor;
pub use target::{host_target, resolve, TargetIdentifier};
