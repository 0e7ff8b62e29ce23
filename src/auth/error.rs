use thiserror::Error;

pub type Result<T, E = AuthError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("The identifier or the secret is empty.")]
    MissingCredentials,
    #[error("The server rejected the credentials.")]
    CredentialsRejected(Option<String>),
    #[error("The connection to the authentication server failed.")]
    ConnectionFailed,
    #[error("Another submission is already in flight.")]
    AlreadyInFlight,
    #[error("Client couldn't be created.")]
    CantCreateClient,
}
