use notify_rust::Notification;
use sleeper_core::api::Notifier;

/// Tell the person at the terminal that something went wrong.
#[derive(Debug, Clone, Copy)]
pub struct Alert {
    /// Also pop up a desktop notification
    desktop: bool,
}

impl Alert {
    /// Get a new `Alert`
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }
}

impl Notifier for Alert {
    fn notify(&self, message: &str) {
        eprintln!("{message}");

        if self.desktop {
            // We don't care if the notification failed to show.
            let _ = Notification::new()
                .summary("Sleeper bus")
                .body(message)
                .show();
        }
    }
}
