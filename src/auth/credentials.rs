use derive_getters::Getters;
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// The pair the user typed in, as sent to the authentication endpoint.
/// Construction goes through [Credentials::from_fields],
/// so both fields are guaranteed non-empty once trimmed.
#[derive(Serialize, Getters, PartialEq, Clone)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Trim both fields and reject the pair if either ends up empty.
    pub fn from_fields(identifier: &str, secret: &str) -> Option<Self> {
        let identifier = identifier.trim();
        let secret = secret.trim();
        if identifier.is_empty() || secret.is_empty() {
            None
        } else {
            Some(Self {
                identifier: identifier.to_owned(),
                secret: secret.to_owned(),
            })
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Credentials {{identifier={}, secret=MASKED}}",
            self.identifier
        )
    }
}
