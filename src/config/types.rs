//! Configuration types and CLI option values.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{
    API_URL, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, RATE_LIMIT_DELAY_MS, REQUEST_TIMEOUT_SECS,
};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

/// Configuration for a single-domain check.
///
/// # Examples
///
/// ```no_run
/// use mailsec::CheckConfig;
///
/// let config = CheckConfig {
///     domain: "example.com".to_string(),
///     json: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Domain to evaluate
    pub domain: String,

    /// Print the raw service response as indented JSON instead of the report
    pub json: bool,

    /// Evaluation endpoint
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            json: false,
            api_url: API_URL.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CheckConfig {
    /// Validates the configuration before any network activity.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.domain.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "domain",
                message: "must not be empty (e.g. example.com)".to_string(),
            });
        }
        validate_endpoint(&self.api_url, self.timeout_seconds)
    }
}

/// Configuration for a bulk check run.
#[derive(Debug, Clone)]
pub struct BulkConfig {
    /// File to read domains from (one per line)
    pub file: PathBuf,

    /// Report file to write
    pub output: PathBuf,

    /// Report format
    pub format: ExportFormat,

    /// Evaluation endpoint
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Pause between consecutive requests in milliseconds
    pub delay_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: ExportFormat::Csv,
            api_url: API_URL.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            delay_ms: RATE_LIMIT_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BulkConfig {
    /// Validates the configuration before any network activity.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_endpoint(&self.api_url, self.timeout_seconds)
    }

    /// Pause applied between consecutive requests.
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

fn validate_endpoint(api_url: &str, timeout_seconds: u64) -> Result<(), ConfigValidationError> {
    if timeout_seconds == 0 {
        return Err(ConfigValidationError {
            field: "timeout_seconds",
            message: "must be greater than 0".to_string(),
        });
    }

    match url::Url::parse(api_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigValidationError {
            field: "api_url",
            message: format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            ),
        }),
        Err(e) => Err(ConfigValidationError {
            field: "api_url",
            message: format!("'{}' is not a valid URL ({})", api_url, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_check_config_default() {
        let config = CheckConfig::default();
        assert_eq!(config.api_url, "https://techli.nz/api/test-domain");
        assert_eq!(config.timeout_seconds, 10);
        assert!(!config.json);
    }

    #[test]
    fn test_bulk_config_default() {
        let config = BulkConfig::default();
        assert_eq!(config.output, PathBuf::from("email_security_report.csv"));
        assert_eq!(config.delay_ms, 1500);
        assert_eq!(config.delay(), std::time::Duration::from_millis(1500));
        assert_eq!(config.format, ExportFormat::Csv);
    }

    #[test]
    fn test_check_config_rejects_empty_domain() {
        let config = CheckConfig {
            domain: "   ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "domain");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = BulkConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_api_url_scheme_validation() {
        let config = BulkConfig {
            api_url: "ftp://techli.nz/api".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "api_url");
        assert!(err.message.contains("ftp"));

        let config = BulkConfig {
            api_url: "not a url".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "api_url");

        let config = BulkConfig {
            api_url: "http://127.0.0.1:8080/api/test-domain".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
