//! mailsec library: email-security evaluation client
//!
//! This library asks a remote evaluation service to grade the email-security
//! posture of a domain (SPF, DKIM, DMARC, MX, BIMI, MTA-STS) and turns the
//! answer into a terminal report, raw JSON, or a bulk CSV/JSONL report.
//!
//! # Example
//!
//! ```no_run
//! use mailsec::{run_bulk_check, BulkConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BulkConfig {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     output: std::path::PathBuf::from("report.csv"),
//!     ..Default::default()
//! };
//!
//! let report = run_bulk_check(config).await?;
//! println!("Checked {} domains, average {:.1}",
//!          report.summary.total, report.summary.average_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod report;
mod run;

// Re-export public API
pub use api::{ApiClient, CheckFailure, CheckResult, DomainChecker, SecurityReport};
pub use app::BulkSummary;
pub use config::{BulkConfig, CheckConfig, LogFormat, LogLevel};
pub use export::ExportFormat;
pub use run::{run_bulk_check, run_bulk_check_with, run_check, run_check_with, BulkReport};
