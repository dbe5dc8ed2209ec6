/// The message users see whenever a call fails, no matter why.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Something that can get a message in front of the user. The client calls
/// this exactly once per failed request.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message);
    }
}

/// Send notifications to the log. Useful when nobody is watching a screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notification = message, "notifying user");
    }
}
