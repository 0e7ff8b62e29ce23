use derive_getters::Getters;
use std::time::Duration;

/// Where and how to reach the authentication endpoint.
/// Resolved once at startup and injected: the flow code never embeds a URL.
#[derive(Getters, Clone)]
pub struct AuthConfig {
    endpoint: String,
    request_timeout: Duration,
}

impl AuthConfig {
    pub fn new(endpoint: String, request_timeout: Duration) -> Self {
        Self {
            endpoint,
            request_timeout,
        }
    }
}
