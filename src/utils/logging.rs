// utils/logging.rs

use log::LevelFilter;

/// Parse a `--log-level` value; unrecognized values mean `info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Sets the logger level based on the provided argument.
pub fn initialize_logger(log_level: &str) {
    env_logger::Builder::new()
        .filter(None, parse_level(log_level))
        .format_timestamp(None)
        .init();
}
