//! Main application modules.
//!
//! This module provides progress logging and run statistics used by the bulk
//! checker.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{
    error_statistics_lines, format_summary, print_error_statistics, summarize, BulkSummary,
};
