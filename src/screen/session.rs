use crate::auth::error::AuthError;
use crate::auth::submitter::LoginSubmitter;
use crate::screen::navigation::{HOME_ROUTE, Navigator, Route};
use crate::screen::notification::{Notification, Notifier};
use log::{debug, error};

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor completa todos los campos";
pub const REJECTED_CREDENTIALS_MESSAGE: &str = "Credenciales incorrectas";
pub const CONNECTION_FAILED_MESSAGE: &str = "No se pudo conectar con el servidor";
pub const REDIRECT_FAILED_MESSAGE: &str =
    "No se pudo abrir la página principal. Vuelve a intentarlo.";

/// The login screen's behavior, stripped of any rendering: the two fields
/// the view binds to, the in-flight flag the view disables its submit
/// control with, and the wiring of every submission outcome to either the
/// navigation or the notification collaborator.
pub struct LoginScreen<N: Navigator, A: Notifier> {
    identifier: String,
    secret: String,
    submitter: LoginSubmitter,
    navigator: N,
    notifier: A,
}

impl<N: Navigator, A: Notifier> LoginScreen<N, A> {
    pub fn new(submitter: LoginSubmitter, navigator: N, notifier: A) -> Self {
        Self {
            identifier: String::new(),
            secret: String::new(),
            submitter,
            navigator,
            notifier,
        }
    }

    // region Input handlers
    pub fn set_identifier(&mut self, value: &str) {
        self.identifier = value.to_owned();
    }

    pub fn set_secret(&mut self, value: &str) {
        self.secret = value.to_owned();
    }
    // endregion

    /// True while a submission is in flight.
    /// The view disables its submit control from this.
    pub fn is_submitting(&self) -> bool {
        self.submitter.is_in_flight()
    }

    /// Submit the current fields.
    /// Success navigates away; every failure ends in a single blocking
    /// notification, except a re-entrant call, which is ignored.
    pub async fn submit(&mut self) {
        match self.submitter.submit(&self.identifier, &self.secret).await {
            Ok(()) => self.redirect(),
            Err(AuthError::AlreadyInFlight) => {
                debug!("A submission is already in flight, ignoring.");
            }
            Err(error) => {
                self.notifier
                    .notify(Notification::error(user_message(&error)));
            }
        }
    }

    fn redirect(&mut self) {
        let route = Route::refreshed(HOME_ROUTE);
        if let Err(error) = self.navigator.navigate(route) {
            error!("Can't redirect user: {error:?}");
            self.notifier
                .notify(Notification::error(REDIRECT_FAILED_MESSAGE.to_owned()));
        }
    }
}

/// Each failure kind maps to exactly one user-facing message.
/// A server may phrase the rejection itself; its message is then shown verbatim.
/// Transport-level causes are logged, never shown.
fn user_message(error: &AuthError) -> String {
    match error {
        AuthError::MissingCredentials => MISSING_FIELDS_MESSAGE.to_owned(),
        AuthError::CredentialsRejected(Some(detail)) => detail.clone(),
        AuthError::CredentialsRejected(None) => REJECTED_CREDENTIALS_MESSAGE.to_owned(),
        _ => CONNECTION_FAILED_MESSAGE.to_owned(),
    }
}
