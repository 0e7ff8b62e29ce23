use derive_getters::Getters;

pub const ERROR_TITLE: &str = "Error";

/// What the blocking alert shows to the user.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Notification {
    title: String,
    message: String,
}

impl Notification {
    pub fn error(message: String) -> Self {
        Self {
            title: ERROR_TITLE.to_owned(),
            message,
        }
    }
}

/// Blocking, user-facing alert collaborator.
/// The screen fires exactly one notification per failed submission.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_error_notification() {
        let notification = Notification::error("No hay conexión".to_owned());

        assert_eq!(ERROR_TITLE, notification.title());
        assert_eq!("No hay conexión", notification.message());
    }
}
