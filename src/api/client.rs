//! Evaluation service client.
//!
//! One POST per domain, no retries: a failed attempt is final for that domain.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use super::types::{CheckFailure, CheckResult};
use crate::error_handling::ApiError;

/// Anything that can turn a domain into a `CheckResult`.
///
/// Implementations never fail: transport and protocol problems are folded
/// into `CheckResult::Error`.
pub trait DomainChecker {
    fn check_domain(&self, domain: &str) -> impl Future<Output = CheckResult> + Send;
}

/// HTTP client for the email-security evaluation endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl ApiClient {
    /// Creates a client posting to `endpoint`.
    ///
    /// The request timeout and user agent are taken from `client`
    /// (see `initialization::init_client`).
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `{"domain": <domain>}` and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` on timeout, connection failure or a non-2xx status
    /// - `ApiError::InvalidJson` if the body is not JSON
    pub async fn fetch_json(&self, domain: &str) -> Result<Value, ApiError> {
        debug!("POST {} for {}", self.endpoint(), domain);

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "domain": domain }))
            .send()
            .await?;

        debug!("{} responded {} for {}", self.endpoint(), response.status(), domain);

        let body = response.error_for_status()?.text().await?;
        serde_json::from_str(&body).map_err(ApiError::InvalidJson)
    }
}

impl DomainChecker for ApiClient {
    async fn check_domain(&self, domain: &str) -> CheckResult {
        let outcome = self
            .fetch_json(domain)
            .await
            .and_then(|body| CheckResult::from_response(domain, body));

        match outcome {
            Ok(result) => result,
            Err(e) => {
                let failure = CheckFailure::from_api_error(domain, &e);
                info!("Check failed for {}: {} ({})", domain, e, failure.kind);
                CheckResult::Error(failure)
            }
        }
    }
}
