//! Bulk run summary statistics.

use log::info;

use crate::api::CheckResult;
use crate::config::{COMPLIANT_LEVEL, REPORT_WIDTH};
use crate::error_handling::{ProcessingStats, ResponseShapeError};

/// Aggregate figures for a finished bulk run.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSummary {
    /// Number of domains checked
    pub total: usize,
    /// Mean overall score, error results counting as 0
    pub average_score: f64,
    /// Results whose compliance level is exactly `compliant`
    pub compliant: usize,
    /// Results that are errors
    pub failed: usize,
}

/// Computes the run summary.
///
/// Error results take part in the average with a score of 0, so a run with
/// many unreachable domains reports a low average. An empty run averages 0.0.
///
/// # Errors
///
/// Returns `ResponseShapeError` if a successful result has no numeric
/// `overallScore`.
pub fn summarize(results: &[CheckResult]) -> Result<BulkSummary, ResponseShapeError> {
    let total = results.len();
    let score_sum = results
        .iter()
        .map(CheckResult::score)
        .sum::<Result<f64, _>>()?;

    #[allow(clippy::cast_precision_loss)]
    let average_score = if total == 0 {
        0.0
    } else {
        score_sum / total as f64
    };

    let compliant = results
        .iter()
        .filter(|r| r.compliance_level() == Some(COMPLIANT_LEVEL))
        .count();
    let failed = results.iter().filter(|r| r.is_error()).count();

    Ok(BulkSummary {
        total,
        average_score,
        compliant,
        failed,
    })
}

/// Renders the summary block printed at the end of a bulk run.
pub fn format_summary(summary: &BulkSummary) -> String {
    let border = "=".repeat(REPORT_WIDTH);
    format!(
        "\n{border}\nSUMMARY\n{border}\n\
         Total domains checked: {total}\n\
         Average score: {avg:.1}/100\n\
         Fully compliant: {compliant}/{total}\n\
         {border}\n\n",
        total = summary.total,
        avg = summary.average_score,
        compliant = summary.compliant,
    )
}

/// Logs per-category failure counts (only categories that occurred).
pub fn print_error_statistics(stats: &ProcessingStats) {
    for line in error_statistics_lines(stats) {
        info!("{}", line);
    }
}

/// The lines logged by `print_error_statistics`; empty when nothing failed.
pub fn error_statistics_lines(stats: &ProcessingStats) -> Vec<String> {
    let total = stats.total();
    if total == 0 {
        return Vec::new();
    }

    let mut lines = vec![format!("Failed checks by category ({} total):", total)];
    lines.extend(
        stats
            .breakdown()
            .map(|(kind, count)| format!("   {}: {}", kind, count)),
    );
    lines
}
