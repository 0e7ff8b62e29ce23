use crate::auth::credentials::Credentials;
use crate::auth::error::AuthError::{ConnectionFailed, CredentialsRejected};
use crate::auth::error::Result;
use crate::tools::log_message_and_return;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

/// Rejection payload, of which only the human-readable `detail` field matters.
/// Anything else the server may put in the body is ignored.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    detail: Option<String>,
}

/// Send the credentials to the authentication endpoint.
/// Exactly one request is issued; there is no retry.
/// A non-2xx status means the server rejected the credentials:
/// the optional `detail` field of its body then carries the server's own message.
pub async fn request_login(
    client: &Client,
    endpoint: &str,
    credentials: &Credentials,
) -> Result<()> {
    let response = client
        .post(endpoint)
        .json(credentials)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach the authentication server",
            ConnectionFailed,
        ))?;

    let status = response.status();
    if status.is_success() {
        debug!("Authenticated on {endpoint}.");
        Ok(())
    } else {
        error!("Authentication rejected [status: {status}]");
        let detail = response
            .json::<RejectionBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(CredentialsRejected(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::web::build_client;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        build_client(Duration::from_secs(5)).unwrap()
    }

    fn credentials() -> Credentials {
        Credentials::from_fields("a@b.com", "pw123").unwrap()
    }

    #[tokio::test]
    async fn should_login() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(
                serde_json::json!({"identifier": "a@b.com", "secret": "pw123"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = request_login(
            &client(),
            &format!("{}/login", mock_server.uri()),
            &credentials(),
        )
        .await;

        assert_eq!(Ok(()), result);
    }

    #[tokio::test]
    async fn should_fail_to_login_when_rejected_with_detail() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Cuenta bloqueada"})),
            )
            .mount(&mock_server)
            .await;

        let error = request_login(
            &client(),
            &format!("{}/login", mock_server.uri()),
            &credentials(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            CredentialsRejected(Some("Cuenta bloqueada".to_owned())),
            error
        );
    }

    #[tokio::test]
    async fn should_fail_to_login_when_rejected_without_detail() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let error = request_login(
            &client(),
            &format!("{}/login", mock_server.uri()),
            &credentials(),
        )
        .await
        .unwrap_err();

        assert_eq!(CredentialsRejected(None), error);
    }

    #[tokio::test]
    async fn should_fail_to_login_when_rejection_body_is_not_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let error = request_login(
            &client(),
            &format!("{}/login", mock_server.uri()),
            &credentials(),
        )
        .await
        .unwrap_err();

        assert_eq!(CredentialsRejected(None), error);
    }

    #[tokio::test]
    async fn should_fail_to_login_when_server_never_answers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_millis(250)).unwrap();
        let error = request_login(
            &client,
            &format!("{}/login", mock_server.uri()),
            &credentials(),
        )
        .await
        .unwrap_err();

        assert_eq!(ConnectionFailed, error);
    }

    #[tokio::test]
    async fn should_fail_to_login_when_unreachable() {
        let endpoint = {
            let mock_server = MockServer::start().await;
            format!("{}/login", mock_server.uri())
        };

        let error = request_login(&client(), &endpoint, &credentials())
            .await
            .unwrap_err();

        assert_eq!(ConnectionFailed, error);
    }
}
