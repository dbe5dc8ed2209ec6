/// The page users land on after logging out.
pub const LANDING_PAGE: &str = "index.html";

/// Something that can send the user somewhere else. Once called, the caller
/// should assume the current flow is over.
pub trait Navigator: Send + Sync {
    /// Go to `location`.
    fn navigate(&self, location: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, location: &str) {
        self(location);
    }
}

/// Record navigation in the log and otherwise do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, location: &str) {
        tracing::info!(location, "navigating");
    }
}
