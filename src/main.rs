//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailsec` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit status and error output
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use mailsec::config::{
    API_URL, API_URL_ENV, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, RATE_LIMIT_DELAY_MS,
    REQUEST_TIMEOUT_SECS,
};
use mailsec::initialization::{init_logger_with, load_dotenv};
use mailsec::{
    run_bulk_check, run_check, BulkConfig, CheckConfig, ExportFormat, LogFormat, LogLevel,
};

/// Check the email security posture of domains (SPF, DKIM, DMARC, MX, BIMI, MTA-STS).
#[derive(Debug, Parser)]
#[command(name = "mailsec", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Evaluation endpoint
    #[arg(long, global = true, env = API_URL_ENV, default_value = API_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = REQUEST_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a single domain
    Check {
        /// Domain to check (e.g. example.com)
        domain: String,

        /// Print the raw service response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every domain listed in a file and write a report
    BulkCheck {
        /// File with one domain per line
        file: PathBuf,

        /// Report file to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Pause between consecutive requests in milliseconds
        #[arg(long, default_value_t = RATE_LIMIT_DELAY_MS)]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let cli = Cli::parse();

    let log_level = cli.global.log_level.clone();
    let log_format = cli.global.log_format.clone();
    if let Err(e) =
        init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")
    {
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let GlobalArgs {
        api_url,
        timeout_seconds,
        ..
    } = cli.global;

    match cli.command {
        Commands::Check { domain, json } => {
            run_check(CheckConfig {
                domain,
                json,
                api_url,
                timeout_seconds,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            })
            .await
        }
        Commands::BulkCheck {
            file,
            output,
            format,
            delay_ms,
        } => {
            run_bulk_check(BulkConfig {
                file,
                output,
                format,
                api_url,
                timeout_seconds,
                delay_ms,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            })
            .await?;
            Ok(())
        }
    }
}
