// globals.rs

//! # Global Settings Module
//!
//! Run-time settings parsed from the global command-line flags. Each value is
//! stored once in a `OnceCell` by `init_globals` and read back by the commands
//! through getter functions, which fall back to the defaults in `app` when
//! nothing was set.
//!
//! ## Example Usage
//! ```rust
//! use crate::globals::{init_globals, output_format};
//! use crate::utils::output::OutputFormat;
//!
//! init_globals(OutputFormat::Json);
//! assert_eq!(output_format(), OutputFormat::Json);
//! ```

use once_cell::sync::OnceCell;

use crate::utils::output::OutputFormat;

/// Output format selected with `--format`.
static OUTPUT_FORMAT: OnceCell<OutputFormat> = OnceCell::new();

/// Stores the global settings. First initialization wins.
pub fn init_globals(format: OutputFormat) {
    OUTPUT_FORMAT.set(format).ok();
}

/// Retrieves the configured output format, `text` when not initialized.
pub fn output_format() -> OutputFormat {
    OUTPUT_FORMAT.get().copied().unwrap_or_default()
}
