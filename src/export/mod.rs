//! Bulk report export.
//!
//! This module writes the accumulated results of a bulk run to a file, either
//! as a flattened CSV summary or as JSON Lines.

mod csv;
mod jsonl;
mod types;

use std::path::Path;

use crate::api::CheckResult;
use crate::error_handling::ReportError;

pub use self::csv::{build_csv_row, export_csv, write_csv, CSV_HEADER};
pub use jsonl::{export_jsonl, write_jsonl};
pub use types::ExportFormat;

/// Writes `results` to `output` in the requested format.
///
/// # Returns
///
/// The number of records written.
pub fn export_report(
    results: &[CheckResult],
    output: &Path,
    format: ExportFormat,
) -> Result<usize, ReportError> {
    match format {
        ExportFormat::Csv => export_csv(results, output),
        ExportFormat::Jsonl => export_jsonl(results, output),
    }
}
