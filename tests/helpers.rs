// Shared test helpers for mock service setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use mailsec::initialization::init_client;
use mailsec::{ApiClient, BulkConfig, CheckConfig, ExportFormat};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock evaluation service listens on.
pub const API_PATH: &str = "/api/test-domain";

/// Writes domains to a temporary file, one per line.
#[allow(dead_code)] // Used by other test files
pub fn write_domains_to_file(domains: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for domain in domains {
        writeln!(file, "{}", domain).expect("Failed to write domain");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// A complete successful evaluation body.
#[allow(dead_code)] // Used by other test files
pub fn sample_body(domain: &str, score: i64, level: &str) -> Value {
    json!({
        "domain": domain,
        "overallScore": score,
        "complianceLevel": level,
        "timestamp": "2025-01-15T10:30:00Z",
        "spf": {"status": "pass", "message": "SPF record found", "record": "v=spf1 include:_spf.google.com ~all"},
        "dkim": {"status": "pass", "message": "DKIM record found", "selector": "google"},
        "dmarc": {"status": "warning", "message": "Policy is none", "policy": "none"},
        "mx": {"status": "pass", "message": "2 MX records found", "records": [
            {"priority": 10, "exchange": "mx1.example.com"},
            {"priority": 20, "exchange": "mx2.example.com"}
        ]}
    })
}

/// Mounts a 200 response with `body` for requests about `domain`.
#[allow(dead_code)] // Used by other test files
pub async fn mount_domain(server: &MockServer, domain: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_json(json!({ "domain": domain })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Endpoint URL of the mock service.
#[allow(dead_code)] // Used by other test files
pub fn api_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PATH)
}

/// An `ApiClient` pointed at the mock service.
#[allow(dead_code)] // Used by other test files
pub fn test_client(server: &MockServer) -> ApiClient {
    let client: Arc<reqwest::Client> =
        init_client(5, "mailsec_test/1.0").expect("Failed to build HTTP client");
    ApiClient::new(client, api_url(server))
}

/// A bulk configuration with no pacing delay.
#[allow(dead_code)] // Used by other test files
pub fn bulk_config(file: PathBuf, output: PathBuf, server: &MockServer) -> BulkConfig {
    BulkConfig {
        file,
        output,
        format: ExportFormat::Csv,
        api_url: api_url(server),
        timeout_seconds: 5,
        delay_ms: 0,
        user_agent: "mailsec_test/1.0".to_string(),
    }
}

/// A single-domain configuration against the mock service.
#[allow(dead_code)] // Used by other test files
pub fn check_config(domain: &str, json: bool, server: &MockServer) -> CheckConfig {
    CheckConfig {
        domain: domain.to_string(),
        json,
        api_url: api_url(server),
        timeout_seconds: 5,
        user_agent: "mailsec_test/1.0".to_string(),
    }
}
