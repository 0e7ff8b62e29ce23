use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScreenError {
    #[error("The redirection to the authenticated area failed.")]
    RedirectFailed,
}
