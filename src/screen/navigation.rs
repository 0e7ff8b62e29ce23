use crate::screen::error::ScreenError;
use chrono::Local;
use derive_getters::Getters;

/// Route to the authenticated area of the app.
pub const HOME_ROUTE: &str = "/";

/// A navigation target plus the freshness parameter carried along with it,
/// so that the destination reloads its own data instead of reusing a stale view.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Route {
    path: String,
    refresh: i64,
}

impl Route {
    /// Build a route stamped with the current time, in milliseconds.
    pub fn refreshed(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            refresh: Local::now().timestamp_millis(),
        }
    }

    pub fn to_uri(&self) -> String {
        format!("{}?refresh={}", self.path, self.refresh)
    }
}

/// Where the screen sends the user once authentication has succeeded.
pub trait Navigator {
    fn navigate(&mut self, route: Route) -> Result<(), ScreenError>;
}
