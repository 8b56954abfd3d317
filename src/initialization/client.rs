//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all evaluation requests.
///
/// Creates a `reqwest::Client` configured with:
/// - A fixed per-request timeout
/// - The given User-Agent header
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}
