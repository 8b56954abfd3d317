//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the evaluation endpoint, timeouts, pacing and report layout.

/// Remote email-security evaluation endpoint.
///
/// Can be overridden with `--api-url` or the `MAILSEC_API_URL` environment
/// variable (also read from a `.env` file).
pub const API_URL: &str = "https://techli.nz/api/test-domain";

/// Environment variable consulted for the API endpoint.
pub const API_URL_ENV: &str = "MAILSEC_API_URL";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Delay between consecutive requests in a bulk run (milliseconds).
/// 1.5s keeps a bulk run under the service's 100 requests/hour allowance
/// for typical list sizes.
pub const RATE_LIMIT_DELAY_MS: u64 = 1500;

/// Report file written by `bulk-check` when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "email_security_report.csv";

/// Width of the `=` borders in the human-readable report and bulk summary.
pub const REPORT_WIDTH: usize = 60;

/// Compliance level reported by the service for fully compliant domains.
pub const COMPLIANT_LEVEL: &str = "compliant";

/// Compliance level assigned to results that could not be obtained.
pub const ERROR_COMPLIANCE_LEVEL: &str = "error";

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("mailsec/", env!("CARGO_PKG_VERSION"));
