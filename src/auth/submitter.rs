use crate::auth::config::AuthConfig;
use crate::auth::credentials::Credentials;
use crate::auth::error::AuthError::{AlreadyInFlight, MissingCredentials};
use crate::auth::error::Result;
use crate::auth::login::request_login;
use crate::auth::submission::SubmissionState;
use crate::tools::web::build_client;
use log::debug;
use reqwest::Client;

/// Owns one screen's submission lifecycle: validates the typed-in fields,
/// issues the single POST and records the [SubmissionState] each call
/// leaves behind.
///
/// At most one submission is in flight at a time. The guard lives here
/// rather than in the view, so the invariant holds no matter how many
/// triggers can call [LoginSubmitter::submit].
pub struct LoginSubmitter {
    config: AuthConfig,
    client: Client,
    state: SubmissionState,
}

impl LoginSubmitter {
    pub fn new(config: AuthConfig) -> Result<Self> {
        let client = build_client(*config.request_timeout())?;
        Ok(Self {
            config,
            client,
            state: SubmissionState::Idle,
        })
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Validate then submit the credentials.
    /// A blank field fails the call before any request is issued and leaves
    /// the current state untouched: the user can fix the fields and resubmit.
    /// Whatever the outcome, the in-flight guard is cleared when this returns.
    pub async fn submit(&mut self, identifier: &str, secret: &str) -> Result<()> {
        if self.state.is_in_flight() {
            return Err(AlreadyInFlight);
        }

        let credentials =
            Credentials::from_fields(identifier, secret).ok_or(MissingCredentials)?;

        self.state = SubmissionState::InFlight;
        let result = request_login(&self.client, self.config.endpoint(), &credentials).await;
        self.state = match &result {
            Ok(()) => SubmissionState::Succeeded,
            Err(error) => SubmissionState::Failed(error.to_string()),
        };
        debug!("Submission settled [state: {:?}]", self.state);

        result
    }
}

#[cfg(test)]
impl LoginSubmitter {
    pub fn set_state(&mut self, state: SubmissionState) {
        self.state = state;
    }
}
