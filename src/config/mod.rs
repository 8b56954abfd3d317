//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, pacing)
//! - Library configuration structs for both entry points
//! - CLI option value types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BulkConfig, CheckConfig, ConfigValidationError, LogFormat, LogLevel};
