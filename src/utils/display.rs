// utils/display.rs

//! # Display Utility Module
//!
//! Helpers for human-facing output: a Unicode message box that lines up
//! correctly with wide characters, and color-coded message macros built on
//! the `colored` crate.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::display::{print_unicode_box, BorderColor};
//!
//! print_unicode_box("Host target: linux-x86_64", BorderColor::Green);
//! print_error!("Host platform is not supported");
//! print_success!("Host matches linux-x86_64");
//! ```

use std::process;

use colored::{Color, Colorize};
use log::error;
use unicode_width::UnicodeWidthStr;

use crate::app::APP_NAME;

/// Border colors for `print_unicode_box`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderColor {
    Yellow,
    Green,
}

impl BorderColor {
    fn color(self) -> Color {
        match self {
            BorderColor::Yellow => Color::BrightYellow,
            BorderColor::Green => Color::Green,
        }
    }
}

/// Lay out `message` inside a box, one output line per input line.
/// Widths are measured with `unicode_width` so emojis keep the border aligned.
pub fn unicode_box_lines(message: &str) -> Vec<String> {
    let lines: Vec<&str> = message.split('\n').collect();

    let max_length = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);

    let mut boxed = Vec::with_capacity(lines.len() + 2);
    boxed.push(format!("┌{}┐", "─".repeat(max_length + 2)));
    for line in lines {
        let padding = max_length - UnicodeWidthStr::width(line);
        boxed.push(format!("│ {}{} │", line, " ".repeat(padding)));
    }
    boxed.push(format!("└{}┘", "─".repeat(max_length + 2)));
    boxed
}

/// Utility function to print a Unicode-styled message box.
pub fn print_unicode_box(message: &str, border_color: BorderColor) {
    for line in unicode_box_lines(message) {
        println!("{}", line.color(border_color.color()));
    }
}

/// Report a failed command and exit with status 1.
pub fn catch_error_and_exit(msg: &str) -> ! {
    error!("{}", msg);
    eprintln!("{}", format!("{} operation failed", APP_NAME).red());
    process::exit(1);
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_pads_to_widest_line() {
        let lines = unicode_box_lines("system: Linux\nmachine: aarch64");
        assert_eq!(
            lines,
            vec![
                "┌──────────────────┐".to_string(),
                "│ system: Linux    │".to_string(),
                "│ machine: aarch64 │".to_string(),
                "└──────────────────┘".to_string(),
            ]
        );
    }

    #[test]
    fn test_box_counts_wide_characters() {
        let lines = unicode_box_lines("🚀\nab");
        assert_eq!(lines[1], "│ 🚀 │");
        assert_eq!(lines[2], "│ ab │");
    }
}
