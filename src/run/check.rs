//! Single-domain check.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::api::{ApiClient, CheckResult};
use crate::config::CheckConfig;
use crate::initialization::init_client;
use crate::report::{render_json, render_report};

/// Checks one domain and prints the report to stdout.
///
/// # Errors
///
/// Fails on invalid configuration, on any transport failure (including a
/// non-2xx status and an error body from the service), and when the response
/// lacks a field the human-readable report needs.
pub async fn run_check(config: CheckConfig) -> Result<()> {
    config.validate()?;
    let client = init_client(config.timeout_seconds, &config.user_agent)
        .context("Failed to initialize HTTP client")?;
    let api = ApiClient::new(client, config.api_url.clone());

    run_check_with(&config, &api, &mut std::io::stdout()).await
}

/// Checks one domain with an existing client, writing output to `out`.
pub async fn run_check_with<W: Write>(
    config: &CheckConfig,
    api: &ApiClient,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Checking email security for: {}...", config.domain)?;
    out.flush()?;

    let body = api
        .fetch_json(&config.domain)
        .await
        .context("Failed to check domain")?;

    if config.json {
        writeln!(out, "{}", render_json(&body)?)?;
        return Ok(());
    }

    match CheckResult::from_response(&config.domain, body) {
        Ok(CheckResult::Success(report)) => {
            let rendered = render_report(&report)
                .map_err(|e| anyhow!("Unexpected API response format: {e}"))?;
            writeln!(out, "{rendered}")?;
            debug!("Rendered report for {}", config.domain);
            Ok(())
        }
        Ok(CheckResult::Error(failure)) => {
            Err(anyhow!("Failed to check domain: {}", failure.error))
        }
        Err(e) => Err(anyhow!(e).context("Unexpected API response format")),
    }
}
