use crate::auth::error::AuthError::CantCreateClient;
use crate::auth::error::Result;
use crate::tools::log_message_and_return;
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client every submission goes through.
/// The timeout bounds the whole request: a server that never answers
/// surfaces as a transport failure instead of keeping the screen waiting.
pub fn build_client(request_timeout: Duration) -> Result<Client> {
    reqwest::ClientBuilder::new()
        .timeout(request_timeout)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
