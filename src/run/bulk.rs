//! Bulk check: sequential, rate-limited, written to a report file.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::{ApiClient, CheckResult, DomainChecker};
use crate::app::{format_summary, log_progress, print_error_statistics, summarize, BulkSummary};
use crate::config::BulkConfig;
use crate::domain::load_domains;
use crate::error_handling::ProcessingStats;
use crate::export::export_report;
use crate::initialization::init_client;

/// What a finished bulk run produced.
#[derive(Debug)]
pub struct BulkReport {
    /// One result per input domain, in input order
    pub results: Vec<CheckResult>,
    pub summary: BulkSummary,
    /// Where the report was written
    pub output: PathBuf,
    pub records_written: usize,
    pub elapsed_seconds: f64,
}

/// Checks every domain listed in `config.file` and writes the report.
///
/// The domain list is read before any network activity, so a missing file
/// fails without issuing a request.
///
/// # Errors
///
/// Fails on invalid configuration, an unreadable domain file, a report that
/// cannot be written, or a successful response missing a field the report
/// needs. A single domain failing to check is not an error: it is recorded as
/// an error row.
pub async fn run_bulk_check(config: BulkConfig) -> Result<BulkReport> {
    config.validate()?;
    let client = init_client(config.timeout_seconds, &config.user_agent)
        .context("Failed to initialize HTTP client")?;
    let api = ApiClient::new(client, config.api_url.clone());

    run_bulk_check_with(&config, &api, &mut std::io::stdout()).await
}

/// Runs a bulk check with the given checker, writing progress to `out`.
pub async fn run_bulk_check_with<C, W>(
    config: &BulkConfig,
    checker: &C,
    out: &mut W,
) -> Result<BulkReport>
where
    C: DomainChecker,
    W: Write,
{
    config.validate()?;
    writeln!(out, "Loading domains from: {}", config.file.display())?;
    out.flush()?;
    let domains = load_domains(&config.file)?;
    writeln!(out, "Found {} domain(s) to check\n", domains.len())?;

    let total = domains.len();
    let delay = config.delay();
    let mut stats = ProcessingStats::new();
    let start_time = Instant::now();
    let mut results = Vec::with_capacity(total);

    for (index, domain) in domains.iter().enumerate() {
        let position = index + 1;
        write!(out, "[{position}/{total}] Checking {domain}... ")?;
        out.flush()?;

        let result = checker.check_domain(domain).await;
        match &result {
            CheckResult::Error(failure) => {
                stats.record(failure.kind);
                writeln!(out, "❌ ERROR: {}", failure.error)?;
            }
            CheckResult::Success(report) => {
                let score = report
                    .overall_score()
                    .context("Unexpected API response format")?;
                writeln!(out, "✅ Score: {score}/100")?;
            }
        }
        out.flush()?;
        results.push(result);

        if position < total && !delay.is_zero() {
            debug!("Waiting {:?} before next request", delay);
            tokio::time::sleep(delay).await;
        }
    }

    writeln!(out, "\nSaving report to: {}", config.output.display())?;
    let records_written = export_report(&results, &config.output, config.format)
        .with_context(|| format!("Failed to write report to {}", config.output.display()))?;
    info!(
        "Wrote {} record(s) to {}",
        records_written,
        config.output.display()
    );

    let summary = summarize(&results).context("Unexpected API response format")?;
    write!(out, "{}", format_summary(&summary))?;
    out.flush()?;

    print_error_statistics(&stats);
    log_progress(start_time, total);

    Ok(BulkReport {
        results,
        summary,
        output: config.output.clone(),
        records_written,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
