mod auth;
#[cfg(feature = "demo")]
mod demo_mock_server;
mod screen;
mod tools;

use crate::auth::config::AuthConfig;
use crate::auth::submitter::LoginSubmitter;
use crate::screen::console::{ConsoleNavigator, ConsoleNotifier};
use crate::screen::session::LoginScreen;
use crate::tools::env_args::retrieve_arg_value;
use log::error;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = build_auth_config().await;
    let submitter = match LoginSubmitter::new(config) {
        Ok(submitter) => submitter,
        Err(error) => {
            error!("Can't create the login submitter, aborting...\n{error:#?}");
            panic!();
        }
    };

    let mut screen = LoginScreen::new(submitter, ConsoleNavigator, ConsoleNotifier);
    screen.set_identifier(&retrieve_arg_value(&["-i", "--identifier"]).unwrap_or_default());
    screen.set_secret(&retrieve_arg_value(&["-s", "--secret"]).unwrap_or_default());
    screen.submit().await;
}

#[cfg(not(feature = "demo"))]
async fn build_auth_config() -> AuthConfig {
    use crate::tools::env_args::retrieve_expected_arg_value;

    match retrieve_expected_arg_value("--endpoint", ()) {
        Ok(endpoint) => AuthConfig::new(endpoint, DEFAULT_REQUEST_TIMEOUT),
        Err(()) => {
            error!("No authentication endpoint configured, aborting... [expected: --endpoint=<url>]");
            panic!();
        }
    }
}

#[cfg(feature = "demo")]
async fn build_auth_config() -> AuthConfig {
    let uri = demo_mock_server::init_demo().await;
    AuthConfig::new(format!("{uri}/login"), DEFAULT_REQUEST_TIMEOUT)
}
