// utils/output.rs

//! # Output Utility Module
//!
//! Renders resolution results and the target table either as plain text for
//! people or as JSON for build scripts.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::output::{render_report, OutputFormat, Report};
//! use host_target::HostDescriptor;
//!
//! let report = Report::resolve(HostDescriptor::new("Linux", "aarch64"));
//! println!("{}", render_report(&report, OutputFormat::Json)?);
//! ```

use std::str::FromStr;

use serde::Serialize;

use host_target::target::{TargetRule, TARGET_TABLE};
use host_target::{resolve, AppError, HostDescriptor, TargetIdentifier};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// A descriptor together with the target it resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub host: HostDescriptor,
    pub target: Option<TargetIdentifier>,
}

impl Report {
    pub fn resolve(host: HostDescriptor) -> Self {
        let target = resolve(&host);
        Self { host, target }
    }

    /// Turn an unresolved report into `AppError::UnsupportedHost`.
    pub fn require_target(&self) -> Result<TargetIdentifier, AppError> {
        self.target.ok_or_else(|| AppError::UnsupportedHost {
            system: self.host.system.clone(),
            machine: self.host.machine.clone(),
        })
    }
}

/// Render a report. Text output is just the identifier, one line.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report.require_target()?.to_string()),
    }
}

/// Render the decision table.
pub fn render_table(rules: &[TargetRule], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
        OutputFormat::Text => {
            let width = rules
                .iter()
                .map(|rule| rule.target.as_str().len())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = rules
                .iter()
                .map(|rule| {
                    format!(
                        "{:<width$}  {:<8} {}",
                        rule.target.as_str(),
                        rule.system,
                        rule.machine,
                        width = width
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Render the full decision table.
pub fn render_target_table(format: OutputFormat) -> Result<String, AppError> {
    render_table(TARGET_TABLE, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report() {
        let report = Report::resolve(HostDescriptor::new("FreeBSD", "amd64"));
        let rendered = render_report(&report, OutputFormat::Text).unwrap();
        assert_eq!(rendered, "freebsd-x86_64");
    }

    #[test]
    fn test_text_report_unsupported() {
        let report = Report::resolve(HostDescriptor::new("Windows", "AMD64"));
        let err = render_report(&report, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedHost { .. }));
    }

    #[test]
    fn test_json_report() {
        let report = Report::resolve(HostDescriptor::new("Linux", "armv7hf"));
        let rendered = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["system"], "Linux");
        assert_eq!(value["machine"], "armv7hf");
        assert_eq!(value["target"], "linux-armv7");
    }

    #[test]
    fn test_json_report_unsupported_is_null() {
        let report = Report::resolve(HostDescriptor::new("Darwin", "arm64"));
        let rendered = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["target"].is_null());
    }

    #[test]
    fn test_text_table() {
        let rendered = render_target_table(OutputFormat::Text).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), TARGET_TABLE.len());
        assert_eq!(lines[0], "linux-x86_64       Linux    x86_64");
        assert_eq!(lines[1], "linux-armv7        Linux    armv7*");
        assert_eq!(lines[6], "freebsd-x86_64     FreeBSD  amd64");
    }

    #[test]
    fn test_json_table() {
        let rendered = render_target_table(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[5]["target"], "macosx-x86_64");
        assert_eq!(rows[5]["match"], "exact");
    }
}
