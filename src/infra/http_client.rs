//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound HTTP clients should be built here rather than constructing
//! `reqwest::Client` directly, so every third-party call is bounded.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build an HTTP client with the default connect timeout and the given total
/// request timeout. The connect timeout never exceeds the total.
pub fn build_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
}
