use serde_json::json;
use std::sync::OnceLock;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Keeps the demo authentication server alive for the whole process:
/// wiremock shuts the server down as soon as it is dropped.
static AUTH_MOCK_SERVER: OnceLock<MockServer> = OnceLock::new();

pub const DEMO_IDENTIFIER: &str = "demo@example.com";
pub const DEMO_SECRET: &str = "demo-secret";

/// Start an in-process authentication endpoint and return its base URI.
/// Only the demo credential pair is accepted;
/// anything else is rejected with a server-phrased `detail` message.
pub async fn init_demo() -> String {
    let mock_server = MockServer::start().await;
    mock_login(&mock_server).await;

    let uri = mock_server.uri();
    AUTH_MOCK_SERVER.get_or_init(|| mock_server);
    uri
}

async fn mock_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "identifier": DEMO_IDENTIFIER,
            "secret": DEMO_SECRET,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Usuario o contraseña incorrectos"})),
        )
        .mount(mock_server)
        .await;
}
