//! HTTP transport helpers for API requests.

use std::time::Duration;

/// Build an HTTP client with timeout applied.
pub(super) fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("vibejam/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
