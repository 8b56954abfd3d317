//! JSONL report export.
//!
//! Each line is one complete JSON object: the service response exactly as
//! received for successes, the service's error shape for failures. Handy for
//! piping to `jq` when the flattened CSV loses too much detail.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::api::CheckResult;
use crate::error_handling::ReportError;

/// Writes one JSON object per result to `writer`.
///
/// # Returns
///
/// The number of lines written.
pub fn write_jsonl<W: Write>(results: &[CheckResult], writer: W) -> Result<usize, ReportError> {
    let mut writer = BufWriter::new(writer);
    for result in results {
        serde_json::to_writer(&mut writer, &result.to_json())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(results.len())
}

/// Writes the JSONL report to `output`, replacing any existing file.
pub fn export_jsonl(results: &[CheckResult], output: &Path) -> Result<usize, ReportError> {
    let file = std::fs::File::create(output)?;
    write_jsonl(results, file)
}
