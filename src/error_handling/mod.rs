//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each concern (input, API, response shape, report)
//! - Categorization of transport failures
//! - Failure counters for bulk runs

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_api_error, categorize_reqwest_error};
pub use stats::ProcessingStats;
pub use types::{
    error_chain, ApiError, ErrorType, InitializationError, InputError, ReportError,
    ResponseShapeError,
};
