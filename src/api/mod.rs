//! Email-security evaluation API.
//!
//! This module provides:
//! - `ApiClient`, which posts a domain to the evaluation endpoint
//! - `CheckResult` and the lenient typed view over the service response

mod client;
mod types;

pub use client::{ApiClient, DomainChecker};
pub use types::{
    CheckFailure, CheckRecord, CheckResult, CheckStatus, FieldText, MxRecord, SecurityReport,
};
