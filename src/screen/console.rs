use crate::screen::error::ScreenError;
use crate::screen::navigation::{Navigator, Route};
use crate::screen::notification::{Notification, Notifier};
use log::info;

/// Headless navigator: there is no view stack to swap here,
/// so reaching the authenticated area is reported on the terminal.
#[derive(Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: Route) -> Result<(), ScreenError> {
        info!("Navigating to {}", route.to_uri());
        println!("Autenticado. Redirigiendo a {}", route.to_uri());
        Ok(())
    }
}

/// Headless stand-in for the blocking alert dialog.
#[derive(Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        eprintln!("[{}] {}", notification.title(), notification.message());
    }
}
