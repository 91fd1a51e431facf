//! HTTP client factory with consistent timeout configuration.
//!
//! All outbound calls (Resend, the announcement webhook, Google tokeninfo)
//! share one client built here. New HTTP clients MUST use `build_client()`
//! rather than constructing `reqwest::Client` directly.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
///
/// Appropriate for the external APIs this service calls, all of which answer
/// within seconds. A future use case needing longer (file uploads, say)
/// should create a separate builder with an explicit extended timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with default timeouts.
///
/// Panics if the client cannot be built (e.g., TLS misconfiguration).
/// Acceptable for singleton constructors wired up once at startup, since the
/// notifier cannot function without an HTTP client.
pub fn build_client() -> Client {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
