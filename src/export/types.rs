//! Export types.

use clap::ValueEnum;

/// Bulk report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (flattened, one row per domain, for Excel/Sheets)
    Csv,
    /// JSONL format (one full service response per line, for jq and scripts)
    Jsonl,
}
