//! Command orchestration: single-domain check and bulk check.

mod bulk;
mod check;

pub use bulk::{run_bulk_check, run_bulk_check_with, BulkReport};
pub use check::{run_check, run_check_with};
