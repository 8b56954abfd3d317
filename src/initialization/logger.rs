//! Logger initialization.
//!
//! Log records go to stderr so they never mix with the report printed on stdout.

use std::io::{self, Write};

use colored::Colorize;
use env_logger::fmt::Formatter;
use env_logger::Target;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Plain output is one colored line per record with an emoji prefix; JSON
/// output is one object per line with `ts`, `level`, `target` and `msg`.
///
/// `RUST_LOG` is read first, then `level` overrides it for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show request/response diagnostics
/// mailsec --log-level debug check example.com
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=reqwest=debug mailsec bulk-check domains.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in DEPENDENCY_LEVELS {
        builder.filter_module(module, cap.min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);
    builder.target(Target::Stderr);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// Upper bounds for chatty HTTP stack targets.
const DEPENDENCY_LEVELS: [(&str, LevelFilter); 4] = [
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let (emoji, level) = match record.level() {
        Level::Error => ("❌", "ERROR".red()),
        Level::Warn => ("⚠️", "WARN".yellow()),
        Level::Info => ("✔️", "INFO".green()),
        Level::Debug => ("🔍", "DEBUG".blue()),
        Level::Trace => ("🔬", "TRACE".purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        level,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_initialization_is_an_error_not_a_panic() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
