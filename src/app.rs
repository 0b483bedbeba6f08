// app.rs

//! # Application Constants
//!
//! Compile-time settings for the `host-target` command line: identity strings
//! shown in `--help`/`--version`, and the defaults of the global flags.

pub const APP_NAME: &str = "host-target";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str = "Resolve the host machine's canonical build-target identifier";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

pub const DEFAULT_OUTPUT_FORMAT: &str = "text";
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];
